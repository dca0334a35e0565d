//! Integration tests for loom-types.

use loom_types::{GridCoord, LoomError, ParticleId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn particle_id_index() {
    let id = ParticleId(42);
    assert_eq!(id.index(), 42);
    assert_eq!(ParticleId::from(7u32), ParticleId(7));
}

#[test]
fn ids_are_serializable() {
    let id = ParticleId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: ParticleId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);

    let coord = GridCoord::new(3, 9);
    let json = serde_json::to_string(&coord).unwrap();
    assert_eq!(json, r#"{"i":3,"j":9}"#);
}

// ─── GridCoord Tests ──────────────────────────────────────────

#[test]
fn grid_offset_in_bounds() {
    let c = GridCoord::new(1, 1);
    assert_eq!(c.offset(1, 0, 4, 4), Some(GridCoord::new(2, 1)));
    assert_eq!(c.offset(-1, 1, 4, 4), Some(GridCoord::new(0, 2)));
    assert_eq!(c.offset(2, 2, 4, 4), Some(GridCoord::new(3, 3)));
}

#[test]
fn grid_offset_out_of_bounds() {
    let corner = GridCoord::new(0, 0);
    assert_eq!(corner.offset(-1, 0, 4, 4), None);
    assert_eq!(corner.offset(0, -1, 4, 4), None);

    let far = GridCoord::new(3, 3);
    assert_eq!(far.offset(1, 0, 4, 4), None);
    assert_eq!(far.offset(0, 2, 4, 4), None);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = LoomError::InvalidGrid("1 column".into());
    assert!(err.to_string().contains("Invalid grid"));
    assert!(err.to_string().contains("1 column"));
}

#[test]
fn io_error_converts() {
    let err: LoomError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(err, LoomError::Io(_)));
    assert!(err.to_string().contains("missing"));
}
