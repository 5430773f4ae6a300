use gpui::SharedString;

/// Defines how an option of a select is identified and what it holds.
pub trait SelectItem {
    /// The type of value this item represents.
    type Value;

    /// Returns a unique name used to identify this item.
    fn name(&self) -> SharedString;

    /// Returns a reference to the underlying value.
    fn value(&self) -> &Self::Value;
}

impl SelectItem for &'static str {
    type Value = &'static str;

    fn name(&self) -> SharedString {
        SharedString::new_static(self)
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

impl SelectItem for String {
    type Value = String;

    fn name(&self) -> SharedString {
        SharedString::from(self.clone())
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

impl SelectItem for SharedString {
    type Value = SharedString;

    fn name(&self) -> SharedString {
        self.clone()
    }

    fn value(&self) -> &Self::Value {
        self
    }
}
