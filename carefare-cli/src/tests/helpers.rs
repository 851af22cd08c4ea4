//! Test helpers for writing questionnaire and catalog fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use carefare_core::test_support::vehicle_of_kind;
use carefare_core::{AnswerSet, VehicleKind, answers::keys};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture");
}

/// Temporary directory holding the files a command reads.
pub(super) struct Workspace {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_answers(&self, name: &str, answers: &AnswerSet) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_string_pretty(answers).expect("serialise answers");
        write_utf8(&path, payload.as_bytes());
        path
    }

    pub(super) fn write_van_catalog(&self, name: &str) -> Utf8PathBuf {
        let path = self.path(name);
        let vehicles = vec![vehicle_of_kind(
            "city-van",
            VehicleKind::WheelchairVan,
            1000,
            300,
            4,
        )];
        let payload = serde_json::to_string(&vehicles).expect("serialise catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

/// A wheelchair user going from Wakayama Station to the medical university hospital.
pub(super) fn wheelchair_hospital_answers() -> AnswerSet {
    AnswerSet::new()
        .with_answer(keys::AREA, "wakayama-city")
        .with_answer(keys::MOBILITY, "wheelchair")
        .with_answer(keys::CARE_CERTIFICATION, "no")
        .with_answer(keys::PURPOSE, "hospital")
        .with_answer(keys::COMPANIONS, "0")
        .with_answer(keys::PICKUP, "和歌山駅")
        .with_answer(keys::DESTINATION, "和歌山県立医科大学附属病院")
}
