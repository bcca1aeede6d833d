use std::fmt;

/// Accumulates newline-terminated output lines during a render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    output: String,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line of markup or script
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.output.push_str(text.as_ref());
        self.output.push('\n');
    }

    /// `var <variable> = <expression>;`
    pub fn declare(&mut self, variable: &str, expression: impl fmt::Display) {
        self.line(format!("var {} = {};", variable, expression));
    }

    /// `<target>.<method>(<arguments>);`
    pub fn call(&mut self, target: &str, method: &str, arguments: &[&str]) {
        self.line(format!("{}.{}({});", target, method, arguments.join(", ")));
    }

    /// Appends output produced by another render pass
    pub fn append(&mut self, other: RenderContext) {
        self.output.push_str(&other.output);
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn into_output(self) -> String {
        self.output
    }
}
