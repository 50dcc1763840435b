use regex::Regex;

/// Fixed indentation (in spaces) for the frame lines a rule emits.
///
/// Only the frame is re-indented: the wrapper's open/close tag lines, the
/// line that leads in the captured markup, and the closing `);`. Interior
/// lines of the captured markup keep whatever indentation they had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapLayout {
    /// Indent of the wrapper's opening and closing tag lines.
    pub wrapper_indent: usize,
    /// Indent of the line that re-emits the captured markup.
    pub inner_indent: usize,
    /// Indent of the closing `);` line.
    pub close_indent: usize,
}

impl WrapLayout {
    /// Layout used by the built-in rules: wrapper at 6, markup at 8, `);` at 4.
    pub fn standard() -> Self {
        Self {
            wrapper_indent: 6,
            inner_indent: 8,
            close_indent: 4,
        }
    }
}

/// One textual substitution rule: rewrite every
/// `invocation(<Target ...>...</Target>);` call so the markup sits inside
/// `<Wrapper>...</Wrapper>`.
///
/// Matching is textual, not structural. The capture runs from the opening
/// marker `<Target` to the nearest subsequent `</Target>`, so mismatched or
/// nested markers can under- or over-match, and a target name that is a
/// prefix of a longer element name (`Timeline` vs `TimelineEntry`) is not
/// disambiguated.
#[derive(Debug, Clone)]
pub struct WrapRule {
    invocation: String,
    target: String,
    wrapper: String,
    layout: WrapLayout,
    regex: Regex,
}

impl WrapRule {
    pub fn new(invocation: &str, target: &str, wrapper: &str, layout: WrapLayout) -> Self {
        let regex = Self::compile(invocation, target);
        Self {
            invocation: invocation.to_string(),
            target: target.to_string(),
            wrapper: wrapper.to_string(),
            layout,
            regex,
        }
    }

    /// Invocation name this rule rewrites (`render`, `rerender`, ...).
    pub fn invocation(&self) -> &str {
        &self.invocation
    }

    /// Element whose invocations get wrapped.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Element inserted around the captured markup.
    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }

    /// Apply this rule to `input`, replacing every non-overlapping match
    /// left-to-right. Returns the rewritten text and the replacement count.
    pub(crate) fn apply(&self, input: &str) -> (String, usize) {
        let mut replacements = 0;
        let output = self.regex.replace_all(input, |caps: &regex::Captures<'_>| {
            replacements += 1;
            self.replacement(&caps[1])
        });

        (output.into_owned(), replacements)
    }

    /// Compile the pass pattern, once per rule: the invocation opener, then
    /// (across whitespace only) the target element captured through its
    /// nearest closing tag, then `);`.
    ///
    /// The leading `\b` keeps each pass to its own match set: `render(` must
    /// not match the tail of `rerender(`.
    fn compile(invocation: &str, target: &str) -> Regex {
        let invocation = regex::escape(invocation);
        let target = regex::escape(target);
        let pattern = format!(r"\b{invocation}\(\s*(<{target}[\s\S]*?</{target}>)\s*\);");
        // Names are escaped, so the pattern is always valid.
        Regex::new(&pattern).expect("Invalid wrap pattern")
    }

    /// Emit the fixed frame around the captured markup. The capture itself
    /// is re-emitted byte-for-byte.
    fn replacement(&self, inner: &str) -> String {
        let invocation = &self.invocation;
        let wrapper = &self.wrapper;
        let wrapper_indent = " ".repeat(self.layout.wrapper_indent);
        let inner_indent = " ".repeat(self.layout.inner_indent);
        let close_indent = " ".repeat(self.layout.close_indent);

        format!(
            "{invocation}(\n{wrapper_indent}<{wrapper}>\n{inner_indent}{inner}\n{wrapper_indent}</{wrapper}>\n{close_indent});"
        )
    }
}

/// The built-in rule set for the Timeline test suite: wrap the initial
/// render and the re-render of `<Timeline>` in `<ToastProvider>`.
///
/// Order is part of the contract: the `render` pass runs first and the
/// `rerender` pass runs on its output.
pub fn timeline_toast_rules() -> Vec<WrapRule> {
    vec![
        WrapRule::new("render", "Timeline", "ToastProvider", WrapLayout::standard()),
        WrapRule::new("rerender", "Timeline", "ToastProvider", WrapLayout::standard()),
    ]
}
