// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! cells {
    // Row shorthand: cells![1, "A", 50.0] → Vec<Cell>
    () => {
        ::std::vec::Vec::<$crate::table::Cell>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::table::Cell::from($value)),+]
    };
}
