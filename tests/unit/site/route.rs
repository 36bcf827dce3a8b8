use super::*;

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/"), Some(Route::Landing));
    assert_eq!(Route::parse("/ad"), Some(Route::Ad));
    assert_eq!(Route::parse("/ad/"), Some(Route::Ad));
}

#[test]
fn rejects_everything_else() {
    for p in ["", "ad", "/ads", "/ad//", "/AD", "/ad/x"] {
        assert_eq!(Route::parse(p), None, "{p}");
    }
}

#[test]
fn paths_round_trip() {
    for r in Route::ALL {
        assert_eq!(Route::parse(r.path()), Some(r));
    }
}
