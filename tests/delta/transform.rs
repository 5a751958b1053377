use anyhow::Result;
use text_delta::attributes::Attributes;
use text_delta::delta::Delta;
use text_delta::optransform::OpTransform;

#[test]
fn transform_insert_and_insert_passes() -> Result<()> {
    let mut a1 = Delta::default();
    a1.insert("A");
    let a2 = a1.clone();

    let mut b1 = Delta::default();
    b1.insert("B");
    let b2 = b1.clone();

    let mut expected1 = Delta::default();
    expected1.retain(1);
    expected1.insert("B");

    let mut expected2 = Delta::default();
    expected2.insert("B");

    let r = a1.transform(&b1, true)?;
    assert_eq!(&r, &expected1);
    let r = a2.transform(&b2, false)?;
    assert_eq!(&r, &expected2);
    Ok(())
}

#[test]
fn transform_insert_and_retain_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("A");

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");

    let mut b = Delta::default();
    b.retain_attr(1, attr.clone());

    let mut expected = Delta::default();
    expected.retain(1);
    expected.retain_attr(1, attr.clone());

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_insert_and_delete_passes() -> Result<()> {
    let mut a = Delta::default();
    a.insert("A");

    let mut b = Delta::default();
    b.delete(1);

    let mut expected = Delta::default();
    expected.retain(1);
    expected.delete(1);

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_delete_and_insert_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut b = Delta::default();
    b.insert("B");

    let mut expected = Delta::default();
    expected.insert("B");

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_delete_and_retain_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut attr = Attributes::default();
    attr.insert("bold", true);
    attr.insert("color", "red");

    let mut b = Delta::default();
    b.retain_attr(1, attr.clone());

    let expected = Delta::default();

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_delete_and_delete_passes() -> Result<()> {
    let mut a = Delta::default();
    a.delete(1);

    let mut b = Delta::default();
    b.delete(1);

    let expected = Delta::default();

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_retain_and_insert_passes() -> Result<()> {
    let mut attr = Attributes::default();
    attr.insert("color", "blue");

    let mut a = Delta::default();
    a.retain_attr(1, attr);

    let mut b = Delta::default();
    b.insert("B");

    let mut expected = Delta::default();
    expected.insert("B");

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_retain_and_retain_passes() -> Result<()> {
    let mut blue = Attributes::default();
    blue.insert("color", "blue");

    let mut red = Attributes::default();
    red.insert("color", "red");
    red.insert("font", "serif");

    let mut a = Delta::default();
    a.retain_attr(1, blue.clone());

    let mut b = Delta::default();
    b.retain_attr(1, red.clone());

    //with priority our color suppresses theirs
    let mut expected = Delta::default();
    let mut font = Attributes::default();
    font.insert("font", "serif");
    expected.retain_attr(1, font);

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);

    //without priority their attributes stand
    let mut expected = Delta::default();
    expected.retain_attr(1, red);

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_retain_and_delete_passes() -> Result<()> {
    let mut attr = Attributes::default();
    attr.insert("color", "blue");

    let mut a = Delta::default();
    a.retain_attr(1, attr);

    let mut b = Delta::default();
    b.delete(1);

    let mut expected = Delta::default();
    expected.delete(1);

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_longer_deltas_passes() -> Result<()> {
    //concurrent edits on "Hello": this inserts in front, other appends
    let mut a = Delta::default();
    a.insert(">>");

    let mut b = Delta::default();
    b.retain(5);
    b.insert("!");

    let mut expected = Delta::default();
    expected.retain(7);
    expected.insert("!");

    let r = a.transform(&b, true)?;
    assert_eq!(&r, &expected);
    Ok(())
}

#[test]
fn transform_delete_overlapping_passes() -> Result<()> {
    //both sides delete an overlapping range
    let mut a = Delta::default();
    a.retain(2);
    a.delete(3);

    let mut b = Delta::default();
    b.delete(4);

    let mut expected = Delta::default();
    expected.delete(2);

    let r = a.transform(&b, false)?;
    assert_eq!(&r, &expected);
    Ok(())
}
