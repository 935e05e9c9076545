//! HTML parsing into a [`DomTree`] using html5ever.

use crate::tree::{DomTree, NodeId};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use log::debug;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse an HTML document into a [`DomTree`].
///
/// html5ever performs its usual error recovery, so this never fails; a
/// malformed document simply yields whatever tree the recovery produced.
pub fn parse_html(html: &str) -> DomTree {
    let rc_dom: RcDom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let mut tree = DomTree::new();
    let root = tree.root();
    convert_node(&rc_dom.document, root, &mut tree);
    debug!("parsed {} bytes of HTML", html.len());
    tree
}

/// Convert an html5ever node into our tree representation.
fn convert_node(rc_node: &Handle, parent: NodeId, tree: &mut DomTree) {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(child, parent, tree);
            }
        }

        // Doctype and processing instructions carry nothing the queries read.
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}

        RcNodeData::Text { contents } => {
            let node = tree.create_text(contents.borrow().to_string());
            tree.append_child(parent, node);
        }

        RcNodeData::Comment { contents } => {
            let node = tree.create_comment(contents.to_string());
            tree.append_child(parent, node);
        }

        RcNodeData::Element { name, attrs, .. } => {
            let node = tree.create_element(name.local.to_string());
            for attr in attrs.borrow().iter() {
                tree.set_attribute(node, attr.name.local.to_string(), attr.value.to_string());
            }
            tree.append_child(parent, node);

            for child in rc_node.children.borrow().iter() {
                convert_node(child, node, tree);
            }
        }
    }
}
