pub mod status;
pub mod text;

pub use status::{
    COPIED_GLYPH, COPY_GLYPH, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE, STATUS_FAILED,
    body_message, status_text,
};
pub use text::{sanitize, truncate};
