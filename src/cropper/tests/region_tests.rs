use crate::cropper::Region;

#[test]
fn test_region_from_corners_is_inclusive() {
    let region = Region::from_corners(2, 3, 7, 8);
    assert_eq!(region, Region::new(2, 3, 6, 6));
    assert_eq!(region.end_x(), 8);
    assert_eq!(region.end_y(), 9);
    assert_eq!(region.area(), 36);
}

#[test]
fn test_region_single_pixel() {
    let region = Region::from_corners(5, 5, 5, 5);
    assert_eq!(region, Region::new(5, 5, 1, 1));
    assert!(region.contains(5, 5));
    assert!(!region.contains(6, 5));
    assert!(!region.is_empty());
}

#[test]
fn test_region_fits_within() {
    assert!(Region::new(0, 0, 10, 10).fits_within(10, 10));
    assert!(Region::new(9, 9, 1, 1).fits_within(10, 10));
    assert!(!Region::new(9, 9, 2, 1).fits_within(10, 10));
    assert!(Region::new(0, 0, 0, 3).is_empty());
}

#[test]
fn test_region_describe() {
    assert_eq!(Region::new(1, 2, 30, 40).describe(), "1,2 30x40");
}
