//! Reusable presentation components shared across screens.

pub mod data_table;
pub mod input_field;
pub mod toast;

pub use data_table::{
    render_data_table, DataTableConfig, PaginationState, TableColumn, TableRow,
};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use toast::{render_toasts, Toast, ToastKind};
