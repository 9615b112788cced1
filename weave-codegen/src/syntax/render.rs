//! Layout shared by every type declaration.

use super::{AttributeNode, TypeRef, UsingDirective};
use crate::builder::CodeFragment;

/// `: Base, IOne, ITwo`, or nothing.
pub(crate) fn base_list<'a>(
    base: Option<&'a TypeRef>,
    implements: impl IntoIterator<Item = &'a TypeRef>,
) -> String {
    let list: Vec<String> = base
        .into_iter()
        .chain(implements)
        .map(ToString::to_string)
        .collect();
    if list.is_empty() {
        String::new()
    } else {
        format!(" : {}", list.join(", "))
    }
}

/// `<T, U>`, or nothing.
pub(crate) fn type_parameters(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

/// Multi-line members: one blank line between each.
pub(crate) fn spaced<T>(
    items: &[T],
    render: impl Fn(&T) -> Vec<CodeFragment>,
) -> Vec<CodeFragment> {
    CodeFragment::separated(items.iter().map(render))
}

/// Single-line members: consecutive.
pub(crate) fn packed<T>(
    items: &[T],
    render: impl Fn(&T) -> Vec<CodeFragment>,
) -> Vec<CodeFragment> {
    items.iter().flat_map(render).collect()
}

/// Attributes, the declaration and its body.
///
/// A type whose sections are all empty collapses to `declaration { }`.
pub(crate) fn type_fragments(
    attributes: &[AttributeNode],
    declaration: String,
    sections: Vec<Vec<CodeFragment>>,
) -> Vec<CodeFragment> {
    let mut fragments: Vec<_> = attributes
        .iter()
        .map(|a| CodeFragment::Line(a.to_string()))
        .collect();

    let body = CodeFragment::separated(sections);
    if body.is_empty() {
        fragments.push(CodeFragment::Line(format!("{} {{ }}", declaration)));
    } else {
        fragments.push(CodeFragment::braced(declaration, body));
    }
    fragments
}

/// Usings, then `body` wrapped in a block namespace when one is given.
pub(crate) fn compilation_unit(
    usings: &[UsingDirective],
    namespace: Option<&str>,
    body: Vec<CodeFragment>,
) -> Vec<CodeFragment> {
    let mut fragments: Vec<_> = usings
        .iter()
        .map(|u| CodeFragment::Line(u.to_string()))
        .collect();
    if !fragments.is_empty() {
        fragments.push(CodeFragment::Blank);
    }

    match namespace {
        Some(ns) => fragments.push(CodeFragment::braced(format!("namespace {}", ns), body)),
        None => fragments.extend(body),
    }
    fragments
}
