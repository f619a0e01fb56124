// Page rendering: askama-backed primitives, card bodies and the page composer.
// Templates live in `apps/web/templates`; everything here is pure, no I/O.

pub mod icons;
pub mod page;
pub mod primitives;
pub mod style;

pub use page::render_page;
