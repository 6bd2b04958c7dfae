//! Versioned field-schema codec for operations.
//!
//! Each operation declares an ordered list of named, typed fields. The binary
//! encoding is a one-byte schema version followed by the fields in exactly that
//! order, each in fixed-width little-endian form. Field order is a compatibility
//! contract: reordering fields changes every encoded operation and every fee.

use crate::create::SplitterCreateOp;
use crate::error::OperationError;
use crate::pay::SplitterPayOp;
use crate::payout::{SplitterDeleteOp, SplitterPayoutOp};
use crate::update::SplitterUpdateOp;
use bincode::Options;
use serde::de::{self, DeserializeOwned};
use serde::Serialize;

/// Largest encoded operation accepted by [`decode`].
pub const MAX_ENCODED_SIZE: u64 = 1024 * 1024;

/// Wire type of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// `amount: i64` then `asset_id: u64`.
    Asset,
    /// Bare `i64` amount.
    ShareAmount,
    /// `u64` instance number.
    AccountId,
    /// `u64` instance number.
    SplitterId,
    /// `u64` length, then per target: `weight: u16`, `u32` variant tag, variant body.
    Targets,
}

/// One named field in a schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> FieldDef {
    FieldDef { name, kind }
}

/// An explicitly described wire layout.
///
/// The struct's field declaration order must match `FIELDS`. [`encode`],
/// [`decode`] and [`encoded_size`] refuse any type for which it does not.
pub trait FieldSchema: Serialize + DeserializeOwned {
    const NAME: &'static str;
    const VERSION: u8;
    const FIELDS: &'static [FieldDef];
}

impl FieldSchema for SplitterCreateOp {
    const NAME: &'static str = "splitter_create";
    const VERSION: u8 = 1;
    const FIELDS: &'static [FieldDef] = &[
        field("fee", FieldKind::Asset),
        field("payer", FieldKind::AccountId),
        field("owner", FieldKind::AccountId),
        field("targets", FieldKind::Targets),
        field("min_payment", FieldKind::Asset),
        field("max_payment", FieldKind::ShareAmount),
        field("payout_threshold", FieldKind::ShareAmount),
    ];
}

impl FieldSchema for SplitterUpdateOp {
    const NAME: &'static str = "splitter_update";
    const VERSION: u8 = 1;
    const FIELDS: &'static [FieldDef] = &[
        field("fee", FieldKind::Asset),
        field("splitter_id", FieldKind::SplitterId),
        field("owner", FieldKind::AccountId),
        field("new_owner", FieldKind::AccountId),
        field("targets", FieldKind::Targets),
        field("min_payment", FieldKind::Asset),
        field("max_payment", FieldKind::ShareAmount),
        field("payout_threshold", FieldKind::ShareAmount),
    ];
}

impl FieldSchema for SplitterPayOp {
    const NAME: &'static str = "splitter_pay";
    const VERSION: u8 = 1;
    const FIELDS: &'static [FieldDef] = &[
        field("fee", FieldKind::Asset),
        field("splitter_id", FieldKind::SplitterId),
        field("paying_account", FieldKind::AccountId),
        field("payment", FieldKind::Asset),
    ];
}

impl FieldSchema for SplitterPayoutOp {
    const NAME: &'static str = "splitter_payout";
    const VERSION: u8 = 1;
    const FIELDS: &'static [FieldDef] = &[
        field("fee", FieldKind::Asset),
        field("splitter_id", FieldKind::SplitterId),
        field("owner", FieldKind::AccountId),
    ];
}

impl FieldSchema for SplitterDeleteOp {
    const NAME: &'static str = "splitter_delete";
    const VERSION: u8 = 1;
    const FIELDS: &'static [FieldDef] = &[
        field("fee", FieldKind::Asset),
        field("splitter_id", FieldKind::SplitterId),
        field("owner", FieldKind::AccountId),
    ];
}

/// Captures the field names a derived `Deserialize` declares for a struct.
struct DeclaredFields {
    names: Option<&'static [&'static str]>,
}

impl<'de> de::Deserializer<'de> for &mut DeclaredFields {
    type Error = de::value::Error;

    fn deserialize_any<V: de::Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: de::Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.names = Some(fields);
        Err(de::Error::custom("fields captured"))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Check that the struct's declared fields are exactly `T::FIELDS`, in order.
pub fn check_layout<T: FieldSchema>() -> Result<(), OperationError> {
    let mut declared = DeclaredFields { names: None };
    // the capturing deserializer always errors once it has seen the struct
    let _ = <T as de::Deserialize>::deserialize(&mut declared);
    let names = declared.names.unwrap_or(&[]);
    if names.iter().copied().eq(T::FIELDS.iter().map(|f| f.name)) {
        Ok(())
    } else {
        Err(OperationError::SchemaMismatch {
            name: T::NAME,
            declared: names.join(", "),
        })
    }
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
        .with_limit(MAX_ENCODED_SIZE)
}

/// Encode `value` as `version || fields...`.
pub fn encode<T: FieldSchema>(value: &T) -> Result<Vec<u8>, OperationError> {
    check_layout::<T>()?;
    let mut out = vec![T::VERSION];
    options()
        .serialize_into(&mut out, value)
        .map_err(|e| OperationError::Codec(e.to_string()))?;
    Ok(out)
}

/// Decode bytes produced by [`encode`], rejecting unknown versions and trailing bytes.
pub fn decode<T: FieldSchema>(bytes: &[u8]) -> Result<T, OperationError> {
    check_layout::<T>()?;
    let (&version, body) = bytes
        .split_first()
        .ok_or_else(|| OperationError::Codec(format!("empty {} payload", T::NAME)))?;
    if version != T::VERSION {
        return Err(OperationError::UnsupportedVersion {
            name: T::NAME,
            found: version,
            expected: T::VERSION,
        });
    }
    options()
        .deserialize(body)
        .map_err(|e| OperationError::Codec(e.to_string()))
}

/// Size in bytes of the encoded form, including the version byte.
pub fn encoded_size<T: FieldSchema>(value: &T) -> Result<u64, OperationError> {
    check_layout::<T>()?;
    let body = options()
        .serialized_size(value)
        .map_err(|e| OperationError::Codec(e.to_string()))?;
    Ok(body + 1)
}

/// Render a schema as `name(field: kind, ...)`.
pub fn describe<T: FieldSchema>() -> String {
    let fields: Vec<String> = T::FIELDS
        .iter()
        .map(|f| format!("{}: {:?}", f.name, f.kind))
        .collect();
    format!("{} v{} ({})", T::NAME, T::VERSION, fields.join(", "))
}
