//! The document's embedded outline (`/Outlines` bookmarks tree).

use std::collections::{BTreeMap, HashSet};

use lopdf::{Dictionary, Document, Object, ObjectId};
use outline_core::NativeOutlineItem;

use super::backend::decode_text_simple;

/// Guard against malformed trees nesting without end.
const MAX_DEPTH: u32 = 64;

/// Guard against absurdly long sibling chains.
const MAX_SIBLINGS: usize = 10_000;

/// Flatten the outline tree in document order with 1-based depths.
///
/// Missing or malformed outlines yield an empty list; destinations that do not
/// resolve to a page are reported as page `0`.
pub fn native_outline(doc: &Document) -> Vec<NativeOutlineItem> {
    let mut items = Vec::new();

    let Some(first) = outline_root(doc).and_then(|root| reference(root, b"First")) else {
        return items;
    };

    let page_numbers: BTreeMap<ObjectId, u32> = doc
        .get_pages()
        .into_iter()
        .map(|(number, id)| (id, number))
        .collect();

    let mut visited = HashSet::new();
    walk(doc, first, 1, &page_numbers, &mut visited, &mut items);
    items
}

fn catalog(doc: &Document) -> Option<&Dictionary> {
    resolve(doc, doc.trailer.get(b"Root").ok()?)?.as_dict().ok()
}

fn outline_root(doc: &Document) -> Option<&Dictionary> {
    resolve(doc, catalog(doc)?.get(b"Outlines").ok()?)?.as_dict().ok()
}

fn walk(
    doc: &Document,
    first: ObjectId,
    depth: u32,
    page_numbers: &BTreeMap<ObjectId, u32>,
    visited: &mut HashSet<ObjectId>,
    items: &mut Vec<NativeOutlineItem>,
) {
    if depth > MAX_DEPTH {
        return;
    }

    let mut current = Some(first);
    let mut siblings = 0;

    while let Some(id) = current {
        if !visited.insert(id) || siblings >= MAX_SIBLINGS {
            log::debug!("outline walk stopped at object {:?}", id);
            break;
        }
        siblings += 1;

        let Some(node) = doc.get_object(id).ok().and_then(|o| o.as_dict().ok()) else {
            break;
        };

        let text = node
            .get(b"Title")
            .ok()
            .and_then(|t| resolve(doc, t))
            .and_then(|t| t.as_str().ok())
            .map(decode_text_simple)
            .unwrap_or_default();

        items.push(NativeOutlineItem {
            depth,
            text,
            page: destination_page(doc, node, page_numbers).unwrap_or(0),
        });

        if let Some(child) = reference(node, b"First") {
            walk(doc, child, depth + 1, page_numbers, visited, items);
        }

        current = reference(node, b"Next");
    }
}

/// Page of an item's `/Dest`, or of the `/D` entry of a GoTo `/A` action.
fn destination_page(
    doc: &Document,
    node: &Dictionary,
    page_numbers: &BTreeMap<ObjectId, u32>,
) -> Option<u32> {
    if let Some(dest) = node.get(b"Dest").ok().and_then(|d| resolve(doc, d)) {
        if let Some(page) = destination_to_page(doc, dest, page_numbers) {
            return Some(page);
        }
    }

    let action = resolve(doc, node.get(b"A").ok()?)?.as_dict().ok()?;
    match action.get(b"S").ok()?.as_name().ok()? {
        b"GoTo" => {
            let dest = resolve(doc, action.get(b"D").ok()?)?;
            destination_to_page(doc, dest, page_numbers)
        }
        _ => None,
    }
}

/// Named destinations (string or name) are looked up in the catalog first.
fn destination_to_page(
    doc: &Document,
    dest: &Object,
    page_numbers: &BTreeMap<ObjectId, u32>,
) -> Option<u32> {
    match dest {
        Object::String(name, _) | Object::Name(name) => {
            let target = named_destination(doc, name)?;
            explicit_destination_page(doc, target, page_numbers)
        }
        other => explicit_destination_page(doc, other, page_numbers),
    }
}

/// Look `name` up in the `/Names /Dests` name tree, then in the older
/// catalog-level `/Dests` dictionary.
fn named_destination<'a>(doc: &'a Document, name: &[u8]) -> Option<&'a Object> {
    let catalog = catalog(doc)?;

    let from_tree = catalog
        .get(b"Names")
        .ok()
        .and_then(|names| resolve(doc, names))
        .and_then(|names| names.as_dict().ok())
        .and_then(|names| resolve(doc, names.get(b"Dests").ok()?))
        .and_then(|tree| tree.as_dict().ok())
        .and_then(|tree| lookup_name_tree(doc, tree, name, 1));

    from_tree.or_else(|| {
        let dests = resolve(doc, catalog.get(b"Dests").ok()?)?.as_dict().ok()?;
        resolve(doc, dests.get(name).ok()?)
    })
}

/// Search a name tree node: its `/Names` key/value pairs, then its `/Kids`.
fn lookup_name_tree<'a>(
    doc: &'a Document,
    node: &'a Dictionary,
    name: &[u8],
    depth: u32,
) -> Option<&'a Object> {
    if depth > MAX_DEPTH {
        return None;
    }

    let pairs = node
        .get(b"Names")
        .ok()
        .and_then(|n| resolve(doc, n))
        .and_then(|n| n.as_array().ok());
    if let Some(pairs) = pairs {
        for pair in pairs.chunks_exact(2) {
            let key = resolve(doc, &pair[0]).and_then(|k| k.as_str().ok());
            if key == Some(name) {
                return resolve(doc, &pair[1]);
            }
        }
    }

    let kids = resolve(doc, node.get(b"Kids").ok()?)?.as_array().ok()?;
    kids.iter()
        .filter_map(|kid| resolve(doc, kid)?.as_dict().ok())
        .find_map(|kid| lookup_name_tree(doc, kid, name, depth + 1))
}

/// `[page_ref /XYZ ...]`-style destinations, or a dictionary wrapping one in `/D`.
fn explicit_destination_page(
    doc: &Document,
    dest: &Object,
    page_numbers: &BTreeMap<ObjectId, u32>,
) -> Option<u32> {
    match dest {
        Object::Array(arr) => match arr.first()? {
            Object::Reference(page_ref) => page_numbers.get(page_ref).copied(),
            // Remote-style destinations carry a 0-based page index.
            Object::Integer(index) => u32::try_from(*index).ok().map(|i| i + 1),
            _ => None,
        },
        Object::Dictionary(dict) => {
            let inner = resolve(doc, dict.get(b"D").ok()?)?;
            explicit_destination_page(doc, inner, page_numbers)
        }
        _ => None,
    }
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn reference(dict: &Dictionary, key: &[u8]) -> Option<ObjectId> {
    dict.get(key).ok()?.as_reference().ok()
}
