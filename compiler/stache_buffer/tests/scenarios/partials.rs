use pretty_assertions::assert_eq;

use super::driver::Context;

#[test]
fn standalone_partial_indents_every_line() {
    let data = [("content", "<\n->")];
    let partials = [("partial", "|\n{{content}}\n|\n")];
    let context = Context {
        data: &data,
        partials: &partials,
    };
    // Interpolated lines are indented too, because the prefix applies to
    // every output line. Mustache's "Standalone Indentation" case leaves
    // `->` unindented; this buffer indents it on purpose.
    assert_eq!(
        context.render("\\\n {{>partial}}\n/\n"),
        "\\\n |\n <\n ->\n |\n/\n"
    );
}

#[test]
fn inline_partial_is_not_indented() {
    let data = [("data", "|")];
    let partials = [("partial", ">\n>")];
    let context = Context {
        data: &data,
        partials: &partials,
    };
    assert_eq!(context.render("  {{data}}  {{> partial}}\n"), "  |  >\n>\n");
}

#[test]
fn standalone_partial_without_newline_in_partial() {
    let partials = [("partial", ">")];
    let context = Context {
        partials: &partials,
        ..Context::default()
    };
    assert_eq!(context.render("  {{>partial}}\n|"), "  >|");
}

#[test]
fn standalone_partial_line_drops_its_crlf_terminator() {
    let partials = [("partial", ">")];
    let context = Context {
        partials: &partials,
        ..Context::default()
    };
    assert_eq!(context.render("|\r\n{{>partial}}\r\n|"), "|\r\n>|");
}

#[test]
fn standalone_partial_on_first_line_indents_each_partial_line() {
    let partials = [("partial", ">\n>")];
    let context = Context {
        partials: &partials,
        ..Context::default()
    };
    assert_eq!(context.render("  {{>partial}}\n>"), "  >\n  >>");
}

#[test]
fn nested_partials_compose_indentation() {
    let partials = [("outer", "<\n  {{>inner}}\n>\n"), ("inner", "a\nb\n")];
    let context = Context {
        partials: &partials,
        ..Context::default()
    };
    assert_eq!(
        context.render("  {{>outer}}\n"),
        "  <\n    a\n    b\n  >\n"
    );
}

#[test]
fn standalone_lines_inside_partial_are_removed() {
    let partials = [("partial", "{{#a}}\nx\n{{/a}}\n")];
    let context = Context {
        partials: &partials,
        ..Context::default()
    };
    assert_eq!(context.render("  {{>partial}}\n"), "  x\n");
}

#[test]
fn empty_standalone_partial_leaves_no_line() {
    let context = Context::default();
    assert_eq!(context.render("a\n{{>missing}}\nb\n"), "a\nb\n");
}
