use std::fmt::Debug;

/// A trait for items that carry a student remark
pub trait Item: Send + Sync + Clone + Debug {
    /// Returns the remark text, if one was left
    fn remark(&self) -> Option<&str>;
}

impl Item for String {
    fn remark(&self) -> Option<&str> {
        Some(self)
    }
}

impl Item for Option<String> {
    fn remark(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl<T: Item> Item for &T {
    fn remark(&self) -> Option<&str> {
        (**self).remark()
    }
}
