//! Wrapper that implements the selectors crate's Element trait for our DOM.

use crate::tree::{DomTree, NodeId};
use selectors::OpaqueElement;
use selectors::attr::{AttrSelectorOperation, AttrSelectorOperator, CaseSensitivity, NamespaceConstraint};

/// Wrapper around a NodeId that implements the selectors Element trait.
#[derive(Clone)]
pub struct ElementWrapper<'a> {
    pub node: NodeId,
    pub tree: &'a DomTree,
}

impl<'a> std::fmt::Debug for ElementWrapper<'a> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ElementWrapper")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

impl<'a> ElementWrapper<'a> {
    pub fn new(node: NodeId, tree: &'a DomTree) -> Self {
        Self { node, tree }
    }

    fn tag_name(&self) -> Option<&'a str> {
        self.tree.tag_name(self.node)
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.tree.attribute(self.node, name)
    }

    fn is_element(&self) -> bool {
        self.tree.is_element(self.node)
    }
}

impl<'a> selectors::Element for ElementWrapper<'a> {
    type Impl = SelectorImpl;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(&self.node)
    }

    fn parent_element(&self) -> Option<Self> {
        let mut parent = self.tree.parent(self.node)?;
        loop {
            let wrapper = ElementWrapper::new(parent, self.tree);
            if wrapper.is_element() {
                return Some(wrapper);
            }
            parent = self.tree.parent(parent)?;
        }
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        let parent = self.tree.parent(self.node)?;
        let mut prev_element = None;
        for &sibling in self.tree.children(parent) {
            if sibling == self.node {
                return prev_element;
            }
            if self.tree.is_element(sibling) {
                prev_element = Some(ElementWrapper::new(sibling, self.tree));
            }
        }
        None
    }

    fn next_sibling_element(&self) -> Option<Self> {
        let parent = self.tree.parent(self.node)?;
        let mut found_self = false;
        for &sibling in self.tree.children(parent) {
            if found_self && self.tree.is_element(sibling) {
                return Some(ElementWrapper::new(sibling, self.tree));
            }
            if sibling == self.node {
                found_self = true;
            }
        }
        None
    }

    fn first_element_child(&self) -> Option<Self> {
        self.tree
            .children(self.node)
            .iter()
            .find(|&&child| self.tree.is_element(child))
            .map(|&child| ElementWrapper::new(child, self.tree))
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, local_name: &str) -> bool {
        self.tag_name().is_some_and(|name| name == local_name)
    }

    fn has_namespace(&self, _ns: &()) -> bool {
        true
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.tag_name() == other.tag_name()
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&()>,
        local_name: &AttrString,
        operation: &AttrSelectorOperation<&AttrString>,
    ) -> bool {
        if !matches!(ns, NamespaceConstraint::Specific(())) {
            return false;
        }

        let Some(attr_value) = self.attribute(&local_name.0) else {
            return false;
        };

        match operation {
            AttrSelectorOperation::Exists => true,
            AttrSelectorOperation::WithValue {
                operator,
                case_sensitivity,
                value,
            } => {
                // Insensitive forms compare ASCII-lowercased copies.
                let (attr_folded, value_folded);
                let (attr, wanted) = if *case_sensitivity == CaseSensitivity::CaseSensitive {
                    (attr_value, value.0.as_str())
                } else {
                    attr_folded = attr_value.to_ascii_lowercase();
                    value_folded = value.0.to_ascii_lowercase();
                    (attr_folded.as_str(), value_folded.as_str())
                };

                match operator {
                    AttrSelectorOperator::Equal => attr == wanted,
                    AttrSelectorOperator::Includes => {
                        attr.split_whitespace().any(|part| part == wanted)
                    }
                    AttrSelectorOperator::DashMatch => {
                        attr == wanted || attr.starts_with(&format!("{wanted}-"))
                    }
                    AttrSelectorOperator::Prefix => {
                        !wanted.is_empty() && attr.starts_with(wanted)
                    }
                    AttrSelectorOperator::Suffix => {
                        !wanted.is_empty() && attr.ends_with(wanted)
                    }
                    AttrSelectorOperator::Substring => {
                        !wanted.is_empty() && attr.contains(wanted)
                    }
                }
            }
        }
    }

    fn match_non_ts_pseudo_class(
        &self,
        _pc: &NonTSPseudoClass,
        _context: &mut selectors::matching::MatchingContext<Self::Impl>,
    ) -> bool {
        false
    }

    fn match_pseudo_element(
        &self,
        _pe: &PseudoElement,
        _context: &mut selectors::matching::MatchingContext<Self::Impl>,
    ) -> bool {
        false
    }

    fn apply_selector_flags(&self, _flags: selectors::matching::ElementSelectorFlags) {
        // No-op: we don't track selector flags
    }

    fn is_link(&self) -> bool {
        self.tag_name()
            .is_some_and(|name| name == "a" || name == "area")
            && self.attribute("href").is_some()
    }

    fn is_html_slot_element(&self) -> bool {
        self.tag_name().is_some_and(|name| name == "slot")
    }

    fn has_id(&self, id: &AttrString, case_sensitivity: CaseSensitivity) -> bool {
        self.attribute("id").is_some_and(|attr_id| match case_sensitivity {
            CaseSensitivity::CaseSensitive => attr_id == id.0,
            CaseSensitivity::AsciiCaseInsensitive => attr_id.eq_ignore_ascii_case(&id.0),
        })
    }

    fn has_class(&self, name: &AttrString, case_sensitivity: CaseSensitivity) -> bool {
        self.attribute("class").is_some_and(|classes| {
            classes
                .split_whitespace()
                .any(|class| match case_sensitivity {
                    CaseSensitivity::CaseSensitive => class == name.0,
                    CaseSensitivity::AsciiCaseInsensitive => class.eq_ignore_ascii_case(&name.0),
                })
        })
    }

    fn imported_part(&self, _name: &AttrString) -> Option<AttrString> {
        None
    }

    fn is_part(&self, _name: &AttrString) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        for &child in self.tree.children(self.node) {
            if self.tree.is_element(child) {
                return false;
            }
            if !self.tree.text_content(child).trim().is_empty() {
                return false;
            }
        }
        true
    }

    fn is_root(&self) -> bool {
        self.tag_name().is_some_and(|name| name == "html")
    }
}

/// String wrapper that implements ToCss
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttrString(pub String);

impl From<&str> for AttrString {
    fn from(text: &str) -> Self {
        AttrString(text.to_string())
    }
}

impl std::borrow::Borrow<str> for AttrString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl cssparser::ToCss for AttrString {
    fn to_css<W>(&self, dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        cssparser::serialize_string(&self.0, dest)
    }
}

/// Selector implementation types
#[derive(Debug, Clone, Copy)]
pub struct SelectorImpl;

impl selectors::SelectorImpl for SelectorImpl {
    type ExtraMatchingData<'a> = ();
    type AttrValue = AttrString;
    type Identifier = AttrString;
    type LocalName = AttrString;
    type NamespacePrefix = AttrString;
    type NamespaceUrl = ();
    type BorrowedLocalName = str;
    type BorrowedNamespaceUrl = ();
    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;
}

/// Non-tree-structural pseudo-classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonTSPseudoClass {}

impl selectors::parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = SelectorImpl;

    fn is_active_or_hover(&self) -> bool {
        match *self {}
    }

    fn is_user_action_state(&self) -> bool {
        match *self {}
    }
}

impl cssparser::ToCss for NonTSPseudoClass {
    fn to_css<W>(&self, _dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        match *self {}
    }
}

/// Pseudo-elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoElement {}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = SelectorImpl;
}

impl cssparser::ToCss for PseudoElement {
    fn to_css<W>(&self, _dest: &mut W) -> std::fmt::Result
    where
        W: std::fmt::Write,
    {
        match *self {}
    }
}
