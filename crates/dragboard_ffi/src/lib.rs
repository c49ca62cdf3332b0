//! Flutter bridge entry points for DragBoard core.

pub mod api;
