//! The element seam shared by the page behaviors.
//!
//! Behaviors write to the page only through [`PageElement`], which
//! `web_sys::Element` implements under the `hydrate` feature. Tests use a
//! recording fake instead of a browser.

use crate::error::FxError;

/// The three element writes the page behaviors need.
pub trait PageElement {
    /// Set an attribute, e.g. `min` on a date input.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the host rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError>;

    /// Add a class to the element's class list. Adding a present class is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the host rejects the class name.
    fn add_class(&self, class: &str) -> Result<(), FxError>;

    /// Set an inline style property, including `--custom` properties.
    ///
    /// # Errors
    ///
    /// Returns [`FxError::Dom`] if the element has no inline style or the host
    /// rejects the write.
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), FxError>;
}

impl<E: PageElement + ?Sized> PageElement for &E {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError> {
        (**self).set_attribute(name, value)
    }

    fn add_class(&self, class: &str) -> Result<(), FxError> {
        (**self).add_class(class)
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), FxError> {
        (**self).set_style_property(name, value)
    }
}

#[cfg(feature = "hydrate")]
impl PageElement for web_sys::Element {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError> {
        web_sys::Element::set_attribute(self, name, value)?;
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<(), FxError> {
        self.class_list().add_1(class)?;
        Ok(())
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), FxError> {
        use wasm_bindgen::JsCast;

        let Some(html) = self.dyn_ref::<web_sys::HtmlElement>() else {
            return Err(FxError::Dom(format!("<{}> has no inline style", self.tag_name())));
        };
        html.style().set_property(name, value)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use super::PageElement;
    use crate::error::FxError;

    /// In-memory element that records every write.
    #[derive(Debug, Default)]
    pub struct RecordingElement {
        pub attributes: RefCell<BTreeMap<String, String>>,
        pub classes: RefCell<Vec<String>>,
        pub styles: RefCell<BTreeMap<String, String>>,
        /// Every write in order, as `kind:name=value`.
        pub writes: RefCell<Vec<String>>,
        /// When set, every write fails with this message.
        pub fail_with: Option<String>,
    }

    impl RecordingElement {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: &str) -> Self {
            Self { fail_with: Some(message.to_owned()), ..Self::default() }
        }

        pub fn style(&self, name: &str) -> Option<String> {
            self.styles.borrow().get(name).cloned()
        }

        pub fn attribute(&self, name: &str) -> Option<String> {
            self.attributes.borrow().get(name).cloned()
        }

        pub fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }

        fn check(&self) -> Result<(), FxError> {
            match &self.fail_with {
                Some(message) => Err(FxError::Dom(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl PageElement for RecordingElement {
        fn set_attribute(&self, name: &str, value: &str) -> Result<(), FxError> {
            self.check()?;
            self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
            self.writes.borrow_mut().push(format!("attr:{name}={value}"));
            Ok(())
        }

        fn add_class(&self, class: &str) -> Result<(), FxError> {
            self.check()?;
            let mut classes = self.classes.borrow_mut();
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_owned());
            }
            self.writes.borrow_mut().push(format!("class:{class}"));
            Ok(())
        }

        fn set_style_property(&self, name: &str, value: &str) -> Result<(), FxError> {
            self.check()?;
            self.styles.borrow_mut().insert(name.to_owned(), value.to_owned());
            self.writes.borrow_mut().push(format!("style:{name}={value}"));
            Ok(())
        }
    }
}
