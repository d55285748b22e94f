/// Builds a [`stmt::Path`](crate::stmt::Path) from its segments.
///
/// `path!("address", "city")` is the path `address.city`.
#[macro_export]
macro_rules! path {
    (
        $( $segment:expr ),+ $(,)?
    ) => {
        [ $( $segment, )+ ].into_iter().collect::<$crate::stmt::Path>()
    };
}
