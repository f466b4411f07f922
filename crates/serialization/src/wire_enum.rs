//! String codec for closed wire enumerations.

/// A closed enumeration with a bijective string mapping.
///
/// `parse` and `as_str` must stay inverse over every declared member. Enums
/// that declare an `UnknownFutureValue` member resolve unmapped strings to it
/// (the evolvable-enum pattern); all others reject unmapped strings, which
/// surfaces as [`crate::ParseError::UnknownEnumValue`] during decode.
pub trait WireEnum: Sized {
    /// Wire-level name of the enumeration, used in decode errors.
    const NAME: &'static str;

    /// The member's wire string.
    fn as_str(&self) -> &'static str;

    /// Resolves a wire string to a member, `None` when unmapped and no
    /// catch-all member exists.
    fn parse(s: &str) -> Option<Self>;
}
