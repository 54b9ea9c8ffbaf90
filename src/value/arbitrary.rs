use arbitrary::{Arbitrary, Result, Unstructured};

use crate::Tag;

use super::{Compound, List, Value};

fn arb_of(u: &mut Unstructured<'_>, tag: Tag) -> Result<Value> {
    use Value::*;

    Ok(match tag {
        Tag::End => return Err(arbitrary::Error::IncorrectFormat),
        Tag::Byte => Byte(u.arbitrary()?),
        Tag::Short => Short(u.arbitrary()?),
        Tag::Int => Value::from(u.arbitrary::<i32>()?),
        Tag::Long => Long(u.arbitrary()?),
        Tag::Float => Value::from(u.arbitrary::<f32>()?),
        Tag::Double => Double(u.arbitrary()?),
        Tag::ByteArray => ByteArray(u.arbitrary()?),
        Tag::String => Value::from(u.arbitrary::<std::string::String>()?),
        Tag::IntArray => IntArray(u.arbitrary()?),
        Tag::LongArray => LongArray(u.arbitrary()?),
        Tag::List => List(u.arbitrary()?),
        Tag::Compound => Compound(u.arbitrary()?),
    })
}

impl<'a> Arbitrary<'a> for Value {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let tag = u.arbitrary::<Tag>()?;
        arb_of(u, tag)
    }
}

// Lists need to all be the same type.
impl<'a> Arbitrary<'a> for List {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let element = u.arbitrary::<Tag>()?;
        if element == Tag::End {
            return Ok(List::empty(Tag::End));
        }

        let len = u.arbitrary_len::<Value>()?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(arb_of(u, element)?);
        }
        Ok(List::from_parts(element, items))
    }
}

impl<'a> Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        u.arbitrary_iter::<(String, Value)>()?
            .collect::<Result<Compound>>()
    }
}
