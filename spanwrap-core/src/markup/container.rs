//! Handles to markup content

/// Anything holding raw markup that can be read and replaced.
pub trait MarkupContainer {
    /// Current raw content
    fn inner_html(&self) -> &str;

    /// Replace the raw content entirely
    fn set_inner_html(&mut self, html: String);
}

impl MarkupContainer for String {
    fn inner_html(&self) -> &str {
        self
    }

    fn set_inner_html(&mut self, html: String) {
        *self = html;
    }
}

impl<C: MarkupContainer + ?Sized> MarkupContainer for Box<C> {
    fn inner_html(&self) -> &str {
        (**self).inner_html()
    }

    fn set_inner_html(&mut self, html: String) {
        (**self).set_inner_html(html);
    }
}
