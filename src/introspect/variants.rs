/// Compile-time enumeration of a closed enum's variants.
///
/// Game enums (damage types, input actions, scene ids) implement this through
/// [`variant_catalog!`], which expands to a static variant slice and an
/// exhaustive name match. No runtime reflection is involved; adding a variant
/// without updating the catalog is a compile error.
pub trait VariantCatalog: Sized + Copy + 'static {
    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// The variant's spelled name
    fn name(&self) -> &'static str;

    /// All variants as a slice
    fn variants() -> &'static [Self] {
        Self::VARIANTS
    }

    /// All variant names, in declaration order
    fn variant_names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|variant| variant.name()).collect()
    }
}

/// Implements [`VariantCatalog`] for a fieldless enum.
///
/// ```
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Element { Fire, Water, Earth }
///
/// ludokit::variant_catalog!(Element { Fire, Water, Earth });
///
/// use ludokit::introspect::VariantCatalog;
/// assert_eq!(Element::variant_names(), ["Fire", "Water", "Earth"]);
/// ```
#[macro_export]
macro_rules! variant_catalog {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::introspect::VariantCatalog for $ty {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
