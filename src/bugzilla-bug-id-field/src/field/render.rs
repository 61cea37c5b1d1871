//! HTML rendering for the field's edit control and property view.

use super::FieldError;
use handlebars::Handlebars;
use serde_json::{json, Value};

/// Link to the bug on the revision page.
const PROPERTY_TEMPLATE: &str = r#"<a href="{{href}}">{{bug_id}}</a>"#;

/// Hint shown under the edit input.
const CAPTION_TEMPLATE: &str = "Example: <tt>{{example}}</tt>";

/// Bug ID used in the edit control caption.
const EXAMPLE_BUG_ID: &str = "2345";

/// A text input for the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditControl {
    /// Input label.
    pub label: String,

    /// Rendered HTML caption.
    pub caption: String,

    /// Form parameter name.
    pub name: String,

    /// Current value.
    pub value: String,
}

/// Renders field HTML with Handlebars.
///
/// Unlike markdown templates, these outputs land in HTML pages, so the
/// registry keeps Handlebars' default HTML escaping for every substituted
/// value.
pub struct FieldRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRenderer {
    /// Creates a renderer in strict mode.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        Self { handlebars }
    }

    /// Renders the property view link.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_property_link(&self, href: &str, bug_id: &str) -> Result<String, FieldError> {
        self.render(PROPERTY_TEMPLATE, &json!({ "href": href, "bug_id": bug_id }))
    }

    /// Renders the edit control for the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_edit_control(
        &self,
        label: &str,
        name: &str,
        value: &str,
    ) -> Result<EditControl, FieldError> {
        let caption = self.render(CAPTION_TEMPLATE, &json!({ "example": EXAMPLE_BUG_ID }))?;
        Ok(EditControl {
            label: label.to_string(),
            caption,
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    fn render(&self, template: &str, data: &Value) -> Result<String, FieldError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
