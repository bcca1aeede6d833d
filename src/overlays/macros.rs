//! Macros to reduce boilerplate in overlay implementations
//!
//! Every overlay stores its script variable in `javascript_variable` and its
//! free-form API options in `options`; the accessors are the same for all of
//! them.

/// Generates the variable and option accessors of an overlay.
///
/// Usage:
/// ```ignore
/// impl_overlay_accessors!(Polyline);
/// ```
macro_rules! impl_overlay_accessors {
    ($overlay:ty) => {
        impl $overlay {
            /// Identifier the overlay is declared under in the generated script
            pub fn javascript_variable(&self) -> &str {
                &self.javascript_variable
            }

            pub fn set_javascript_variable(
                &mut self,
                name: impl Into<String>,
            ) -> $crate::Result<()> {
                self.javascript_variable = $crate::core::checked_variable(name.into())?;
                Ok(())
            }

            /// Additional API options, rendered after the geometry keys
            pub fn options(&self) -> &$crate::core::Options {
                &self.options
            }

            pub fn set_option(
                &mut self,
                key: impl Into<String>,
                value: impl Into<serde_json::Value>,
            ) {
                self.options.insert(key.into(), value.into());
            }

            pub fn set_options(&mut self, options: $crate::core::Options) {
                self.options = options;
            }

            pub fn remove_option(&mut self, key: &str) -> Option<serde_json::Value> {
                self.options.shift_remove(key)
            }

            pub fn with_option(
                mut self,
                key: impl Into<String>,
                value: impl Into<serde_json::Value>,
            ) -> Self {
                self.set_option(key, value);
                self
            }
        }
    };
}
