use regex::Regex;

use crate::rules::Violation;

/// Patterns that recognise a method opening and extract its display name.
///
/// Compiled once and shared by every tracker.
pub struct MethodMatcher {
    opening: Regex,
    signature: Regex,
}

impl Default for MethodMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Closing paren followed by an opening brace: a signature opening its body.
            opening: Regex::new(r"\)\s?\{").expect("Invalid regex"),
            signature: Regex::new(r"\s([a-zA-Z]+\s?\(.*\))").expect("Invalid regex"),
        }
    }

    /// Byte offset just past the opening brace, if the line opens a method.
    #[must_use]
    pub fn opening_end(&self, text: &str) -> Option<usize> {
        self.opening.find(text).map(|m| m.end())
    }

    /// Name shown in reports, e.g. `run(String[] args)`.
    ///
    /// Falls back to the trimmed text before the brace when the line has no
    /// `name(args)` shape after whitespace.
    #[must_use]
    pub fn display_name(&self, text: &str) -> String {
        if let Some(name) = self.signature.captures(text).and_then(|caps| caps.get(1)) {
            return name.as_str().to_string();
        }
        let head = text.find('{').map_or(text, |brace| &text[..brace]);
        head.trim().to_string()
    }
}

impl std::fmt::Debug for MethodMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodMatcher")
            .field("opening", &self.opening.as_str())
            .field("signature", &self.signature.as_str())
            .finish()
    }
}

/// Mutable state of the method currently being measured.
///
/// `depth` is the brace nesting depth; the tracker is inside a method
/// exactly when it is non-zero. Everything resets when it returns to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodScanState {
    pub depth: usize,
    pub method_name: String,
    /// Lines seen strictly after the opening line and before the closing one.
    pub body_lines: usize,
    pub start_line: usize,
}

impl MethodScanState {
    #[must_use]
    pub const fn in_method(&self) -> bool {
        self.depth > 0
    }
}

/// Brace-depth state machine that delimits method bodies.
///
/// Outside a method, a line matching `) {` opens one. Inside, every `{`
/// deepens and every `}` closes one level, with braces inside strings and
/// comments counted like any other. Only the outermost method is tracked;
/// nested definitions just add depth.
#[derive(Debug)]
pub struct MethodBoundaryTracker<'a> {
    matcher: &'a MethodMatcher,
    max_body_lines: usize,
    state: MethodScanState,
}

impl<'a> MethodBoundaryTracker<'a> {
    #[must_use]
    pub fn new(matcher: &'a MethodMatcher, max_body_lines: usize) -> Self {
        Self {
            matcher,
            max_body_lines,
            state: MethodScanState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &MethodScanState {
        &self.state
    }

    #[must_use]
    pub const fn is_inside(&self) -> bool {
        self.state.in_method()
    }

    /// Feed the next line. Returns a method-length violation when this line
    /// closes a body that ran over the limit.
    pub fn feed(&mut self, number: usize, text: &str) -> Option<Violation> {
        if self.state.in_method() {
            self.track_body_line(text)
        } else {
            self.try_open(number, text);
            None
        }
    }

    fn try_open(&mut self, number: usize, text: &str) {
        let Some(body_start) = self.matcher.opening_end(text) else {
            return;
        };

        self.state = MethodScanState {
            depth: 1,
            method_name: self.matcher.display_name(text),
            body_lines: 0,
            start_line: number,
        };

        // A body that opens and closes on its own line has no body lines.
        self.apply_braces(&text[body_start..]);
        if !self.state.in_method() {
            self.state = MethodScanState::default();
        }
    }

    fn track_body_line(&mut self, text: &str) -> Option<Violation> {
        self.apply_braces(text);
        if self.state.in_method() {
            self.state.body_lines += 1;
            return None;
        }

        let finished = std::mem::take(&mut self.state);
        (finished.body_lines > self.max_body_lines).then(|| {
            Violation::method_too_long(
                &finished.method_name,
                finished.start_line,
                finished.body_lines,
                self.max_body_lines,
            )
        })
    }

    fn apply_braces(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '{' => self.state.depth += 1,
                // Closing at depth zero is a no-op, like popping an empty stack.
                '}' => self.state.depth = self.state.depth.saturating_sub(1),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "method_tests.rs"]
mod tests;
