pub mod conversion;
pub use conversion::{ConversionRule, Rule};

mod data_type;
pub use data_type::{ColumnSpec, DataType};

mod field_type;
pub use field_type::FieldType;

mod model;
pub use model::{Auto, Field, Model, ModelSchema};
