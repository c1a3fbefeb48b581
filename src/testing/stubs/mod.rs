mod constant_label_set;

pub use constant_label_set::ConstantLabelSet;
