use anyhow::Result;
use text_delta::attributes::Attributes;
use text_delta::delta::Delta;
use text_delta::optransform::OpTransform;
use text_delta::types::attr_val::AttrVal;

#[test]
fn compose_insert_insert_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("A");

    let mut b = Delta::default();
    b.insert("B");

    let mut expected = Delta::default();
    expected.insert("B");
    expected.insert("A");

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_insert_retain_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("A");

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");
    attr.insert("font", AttrVal::Null);

    let mut b = Delta::default();
    b.retain_attr(1, attr);

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");

    let mut expected = Delta::default();
    expected.insert_attr("A", attr);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_insert_delete_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("A");

    let mut b = Delta::default();
    b.delete(1);

    let expected = Delta::default();
    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_delete_insert_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut b = Delta::default();
    b.insert("B");

    let mut expected = Delta::default();
    expected.insert("B");
    expected.delete(1);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_delete_retain_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");

    let mut b = Delta::default();
    b.retain_attr(1, attr.clone());

    let mut expected = Delta::default();
    expected.delete(1);
    expected.retain_attr(1, attr);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_delete_delete_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut b = Delta::default();
    b.delete(1);

    let mut expected = Delta::default();
    expected.delete(2);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_retain_insert_passes() -> Result<()> {
    let mut attr = Attributes::default();
    attr.insert("color", "blue");

    let mut a = Delta::default();
    a.retain_attr(1, attr.clone());

    let mut b = Delta::default();
    b.insert("B");

    let mut expected = Delta::default();
    expected.insert("B");
    expected.retain_attr(1, attr);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_retain_retain_passes() -> Result<()> {
    let mut blue = Attributes::default();
    blue.insert("color", "blue");

    let mut a = Delta::default();
    a.retain_attr(1, blue.clone());

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");
    attr.insert("font", AttrVal::Null);

    let mut b = Delta::default();
    b.retain_attr(1, attr.clone());

    //the null survives between two retains, and red wins over blue
    let mut composed = Attributes::default();
    composed.insert("bold", true);
    composed.insert("color", "red");
    composed.insert("font", AttrVal::Null);

    let mut expected = Delta::default();
    expected.retain_attr(1, composed);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_retain_delete_passes() -> Result<()> {
    let mut attr = Attributes::default();
    attr.insert("color", "blue");

    let mut a = Delta::default();
    a.retain_attr(1, attr);

    let mut b = Delta::default();
    b.delete(1);

    let mut expected = Delta::default();
    expected.delete(1);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_insert_in_middle_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("Hello");

    let mut b = Delta::default();
    b.retain(3);
    b.insert("X");

    let mut expected = Delta::default();
    expected.insert("HelXlo");

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_append_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("Hello");

    let mut b = Delta::default();
    b.retain(5);
    b.insert(" World");

    let mut expected = Delta::default();
    expected.insert("Hello World");

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_insert_delete_ordering_passes() -> Result<()> {
    let mut base = Delta::default();
    base.insert("Hello");

    let mut insert_first = Delta::default();
    insert_first.retain(3);
    insert_first.insert("X");
    insert_first.delete(1);

    let mut delete_first = Delta::default();
    delete_first.retain(3);
    delete_first.delete(1);
    delete_first.insert("X");

    let mut expected = Delta::default();
    expected.insert("HelXo");

    assert_eq!(base.compose(&insert_first)?, expected);
    assert_eq!(base.compose(&delete_first)?, expected);
    Ok(())
}

#[test]
fn compose_retain_start_optimization_passes() -> Result<()> {
    //a leading plain retain leaves the leading inserts untouched
    let mut bold = Attributes::default();
    bold.insert("bold", true);

    let mut a = Delta::default();
    a.insert_attr("A", bold.clone());
    a.insert("B");
    a.insert_attr("C", bold.clone());
    a.delete(1);

    let mut b = Delta::default();
    b.retain(3);
    b.insert("D");

    //the plain "D" does not merge with the bold "C"
    let mut expected = Delta::default();
    expected.insert_attr("A", bold.clone());
    expected.insert("B");
    expected.insert_attr("C", bold);
    expected.insert("D");
    expected.delete(1);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_attributed_retain_start_formats_inserts_passes() -> Result<()> {
    //an attributed leading retain must format the inserts it covers
    let mut bold = Attributes::default();
    bold.insert("bold", true);

    let mut a = Delta::default();
    a.insert("ab");

    let mut b = Delta::default();
    b.retain_attr(2, bold.clone());

    let mut expected = Delta::default();
    expected.insert_attr("ab", bold);

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_remove_attributes_passes() -> Result<()> {
    let mut bold = Attributes::default();
    bold.insert("bold", true);

    let mut a = Delta::default();
    a.insert_attr("A", bold);

    let mut unbold = Attributes::default();
    unbold.insert("bold", AttrVal::Null);

    let mut b = Delta::default();
    b.retain_attr(1, unbold);

    let mut expected = Delta::default();
    expected.insert("A");

    let r = a.compose(&b)?;
    assert_eq!(r, expected);
    Ok(())
}

#[test]
fn compose_longer_tail_passes() -> Result<()> {
    //other runs out in the middle; the remainder of this passes through
    let mut bold = Attributes::default();
    bold.insert("bold", true);

    let mut a = Delta::default();
    a.insert("Hello");
    a.retain_attr(4, bold.clone());
    a.delete(1);

    let mut b = Delta::default();
    b.retain(2);

    let r = a.compose(&b)?;
    assert_eq!(r, a);
    Ok(())
}
