//! End-to-end picker scenarios driven through the shared session.

use pickcountry_core::{CodeAliasTable, Config, Directory, GroupedEntry, GroupedTable, Session};
use std::sync::Arc;

fn us_ca() -> Directory {
    let mut codes = CodeAliasTable::new();
    codes.insert(
        "US".into(),
        vec!["United States".into(), "USA".into(), "America".into()],
    );
    codes.insert("CA".into(), vec!["Canada".into()]);
    Directory::build(&codes, &GroupedTable::new()).unwrap()
}

/// 200 synthetic countries spread over every initial letter.
fn two_hundred() -> Directory {
    let mut codes = CodeAliasTable::new();
    for i in 0..200u32 {
        let initial = char::from(b'A' + (i % 26) as u8);
        let code = format!("{}{}", char::from(b'A' + (i / 26) as u8), initial);
        codes.insert(code, vec![format!("{initial}land {i:03}")]);
    }
    Directory::build(&codes, &GroupedTable::new()).unwrap()
}

fn session(dir: Directory) -> Session {
    Session::new(Arc::new(dir), Config::default())
}

#[test]
fn typing_usa_then_confirm_selects_us() {
    let s = session(us_ca());

    s.submit_event("U", "KeyU");
    s.submit_event("S", "KeyS");
    let snap = s.submit_event("A", "KeyA");
    assert_eq!(snap.list, ["USA"]);
    assert_eq!(snap.selection, 0);
    assert!(!snap.is_final);
    assert_eq!(snap.selected_code, None);

    let snap = s.submit_event("confirm", "Enter");
    assert!(snap.is_final);
    assert_eq!(snap.selected_code.as_ref().map(|c| c.as_str()), Some("US"));
    assert_eq!(snap.filter, "USA");
}

#[test]
fn empty_filter_on_a_large_directory_is_the_alphabet() {
    let s = session(two_hundred());
    let snap = s.snapshot();
    let letters: Vec<String> = ('A'..='Z').map(String::from).collect();
    assert_eq!(snap.list, letters);
    assert_eq!(snap.selection, 0);
    assert_eq!(snap.filter, "");
}

#[test]
fn confirm_after_final_restores_the_initial_snapshot() {
    let fresh = session(us_ca()).snapshot();

    let s = session(us_ca());
    for key in ["c", "confirm"] {
        s.submit_event(key, "");
    }
    assert!(s.snapshot().is_final);
    assert_eq!(s.submit_event("confirm", "Enter"), fresh);
}

#[test]
fn navigating_letters_down_to_a_name() {
    let s = session(two_hundred());

    // Alphabet -> "D" -> D-names (8 of them) fit in the window.
    s.submit_event("move-next", "");
    s.submit_event("move-next", "");
    s.submit_event("move-next", "");
    let snap = s.submit_event("confirm", "");
    assert_eq!(snap.filter, "D");
    assert_eq!(snap.list.len(), 8);
    assert!(snap.list.iter().all(|n| n.starts_with("Dland")));

    s.submit_event("page-next", "");
    let snap = s.submit_event("move-prev", "");
    assert_eq!(snap.selection, 6);

    let snap = s.submit_event("confirm", "");
    assert!(snap.is_final);
    assert_eq!(snap.filter, "Dland 159");
    assert_eq!(snap.selected_code.map(|c| c.to_string()).as_deref(), Some("GD"));
}

#[test]
fn too_many_matches_degrade_to_next_letters() {
    let mut codes = CodeAliasTable::new();
    for (i, suffix) in ["ia", "ib", "ic", "o", "u"].iter().enumerate() {
        for n in 0..5 {
            codes.insert(format!("Z{i}{n}"), vec![format!("Z{suffix}{n}")]);
        }
    }
    let s = Session::new(
        Arc::new(Directory::build(&codes, &GroupedTable::new()).unwrap()),
        Config::new(10),
    );

    let snap = s.submit_event("z", "KeyZ");
    assert_eq!(snap.list, ["I", "O", "U"]);

    // Descend into "I": 15 matches is still above the window.
    let snap = s.submit_event("confirm", "Enter");
    assert_eq!(snap.filter, "zI");
    assert_eq!(snap.list, ["A", "B", "C"]);

    let snap = s.submit_event("back-one", "ArrowLeft");
    assert_eq!(snap.filter, "z");
    assert_eq!(snap.selection, 0);
}

#[test]
fn secondary_table_contributes_aliases() {
    let mut codes = CodeAliasTable::new();
    codes.insert("DE".into(), vec!["Germany".into()]);
    let mut alpha = GroupedTable::new();
    alpha.insert("D".into(), vec![GroupedEntry::new("Deutschland", "de")]);
    let s = session(Directory::build(&codes, &alpha).unwrap());

    for c in "deu".chars() {
        s.submit_event(&c.to_string(), "");
    }
    let snap = s.submit_event("confirm", "Enter");
    assert_eq!(snap.filter, "Deutschland");
    assert_eq!(snap.selected_code.map(|c| c.to_string()).as_deref(), Some("DE"));
}

#[test]
fn unknown_and_out_of_range_input_is_absorbed() {
    let s = session(us_ca());
    let before = s.snapshot();
    for key in ["Escape", "F5", "", "page-prev", "move-prev", "back-one", "backspace"] {
        assert_eq!(s.submit_event(key, ""), before, "{key:?} changed the state");
    }
}
