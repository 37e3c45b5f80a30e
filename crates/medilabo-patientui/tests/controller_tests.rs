//! Page controller tests against in-memory backends.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use chrono::NaiveDate;
use tower::ServiceExt;

use medilabo_patientui::clients::{ClientError, ClientResult};
use medilabo_patientui::{
    router, ClinicalNotes, Gender, IdError, Note, NoteForm, Page, PageError, Patient,
    PatientController, PatientDirectory, PatientForm, PatientId, RiskAssessment, RiskAssessor,
    RiskLevel, View,
};

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    ListPatients,
    GetPatient(u32),
    CreatePatient(Patient),
    UpdatePatient(u32, Patient),
    ListNotes(String),
    GetNote(String),
    CreateNote(Note),
    UpdateNote(String, Note),
    Risk(String),
}

#[derive(Default)]
struct State {
    patients: BTreeMap<u32, Patient>,
    notes: Vec<Note>,
    calls: Vec<Call>,
    risk_down: bool,
}

/// One fake standing in for all three services.
#[derive(Clone, Default)]
struct FakeBackend {
    state: Arc<Mutex<State>>,
}

impl FakeBackend {
    fn with_patient(self, id: u32, first: &str, last: &str) -> Self {
        let mut patient = Patient::new(
            first,
            last,
            NaiveDate::from_ymd_opt(1970, 3, 14).unwrap(),
            Gender::M,
        );
        patient.id = Some(PatientId::new(id).unwrap());
        self.state.lock().unwrap().patients.insert(id, patient);
        self
    }

    fn with_note(self, id: &str, patient_id: &str, name: &str, content: &str) -> Self {
        self.state.lock().unwrap().notes.push(Note {
            id: Some(id.to_string()),
            patient_id: patient_id.to_string(),
            patient_name: name.to_string(),
            content: content.to_string(),
        });
        self
    }

    fn risk_down(self) -> Self {
        self.state.lock().unwrap().risk_down = true;
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn controller(&self) -> PatientController {
        PatientController::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            Arc::new(self.clone()),
        )
    }

    fn rename_patient(&self, id: u32, last: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(patient) = state.patients.get_mut(&id) {
            patient.last_name = last.to_string();
        }
    }
}

#[async_trait]
impl PatientDirectory for FakeBackend {
    async fn list_all(&self) -> ClientResult<Vec<Patient>> {
        self.record(Call::ListPatients);
        Ok(self.state.lock().unwrap().patients.values().cloned().collect())
    }

    async fn get_by_id(&self, id: PatientId) -> ClientResult<Patient> {
        self.record(Call::GetPatient(id.get()));
        self.state
            .lock()
            .unwrap()
            .patients
            .get(&id.get())
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("/patient/{}", id)))
    }

    async fn create(&self, patient: &Patient) -> ClientResult<Patient> {
        self.record(Call::CreatePatient(patient.clone()));
        let mut state = self.state.lock().unwrap();
        let next = state.patients.keys().max().copied().unwrap_or(0) + 1;
        let mut saved = patient.clone();
        saved.id = Some(PatientId::new(next).unwrap());
        state.patients.insert(next, saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: PatientId, patient: &Patient) -> ClientResult<Patient> {
        self.record(Call::UpdatePatient(id.get(), patient.clone()));
        let mut state = self.state.lock().unwrap();
        if !state.patients.contains_key(&id.get()) {
            return Err(ClientError::NotFound(format!("/patient/{}", id)));
        }
        let mut saved = patient.clone();
        saved.id = Some(id);
        state.patients.insert(id.get(), saved.clone());
        Ok(saved)
    }
}

#[async_trait]
impl ClinicalNotes for FakeBackend {
    async fn list_by_patient(&self, patient_id: &str) -> ClientResult<Vec<Note>> {
        self.record(Call::ListNotes(patient_id.to_string()));
        Ok(self
            .state
            .lock()
            .unwrap()
            .notes
            .iter()
            .filter(|n| n.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> ClientResult<Vec<Note>> {
        Ok(self.state.lock().unwrap().notes.clone())
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Note> {
        self.record(Call::GetNote(id.to_string()));
        self.state
            .lock()
            .unwrap()
            .notes
            .iter()
            .find(|n| n.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("/notes/{}", id)))
    }

    async fn create(&self, note: &Note) -> ClientResult<Note> {
        self.record(Call::CreateNote(note.clone()));
        let mut saved = note.clone();
        saved.id = Some(uuid::Uuid::new_v4().to_string());
        self.state.lock().unwrap().notes.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, id: &str, note: &Note) -> ClientResult<Note> {
        self.record(Call::UpdateNote(id.to_string(), note.clone()));
        let mut state = self.state.lock().unwrap();
        let slot = state
            .notes
            .iter_mut()
            .find(|n| n.id.as_deref() == Some(id))
            .ok_or_else(|| ClientError::NotFound(format!("/notes/{}", id)))?;
        *slot = note.clone();
        Ok(note.clone())
    }
}

#[async_trait]
impl RiskAssessor for FakeBackend {
    async fn get_by_patient_id(&self, patient_id: &str) -> ClientResult<RiskAssessment> {
        self.record(Call::Risk(patient_id.to_string()));
        let state = self.state.lock().unwrap();
        if state.risk_down {
            return Err(ClientError::Status {
                status: 503,
                url: format!("http://gateway:8081/medilabo-risk-diabetes-service/calculateRisk/{}", patient_id),
            });
        }
        let count = state
            .notes
            .iter()
            .filter(|n| n.patient_id == patient_id)
            .count() as u32;
        Ok(RiskAssessment {
            patient_id: patient_id.to_string(),
            diabetes_risk_level: RiskLevel::None,
            trigger_words_counter: count,
        })
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn patient_form(first: &str, last: &str, birth: &str, gender: &str) -> PatientForm {
    PatientForm {
        id: None,
        first_name: Some(first.into()),
        last_name: Some(last.into()),
        birth_date: Some(birth.into()),
        gender: Some(gender.into()),
        address: Some("3 Club Road".into()),
        phone: Some(String::new()),
    }
}

fn note_form(content: &str) -> NoteForm {
    NoteForm {
        content: Some(content.into()),
        ..Default::default()
    }
}

// =========================================================================
// Patient Pages
// =========================================================================

#[tokio::test]
async fn test_home_redirects_without_calls() {
    let backend = FakeBackend::default();
    assert_eq!(
        backend.controller().home(),
        Page::Redirect("/patients".into())
    );
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_list_patients() {
    let backend = FakeBackend::default()
        .with_patient(1, "Test", "TestNone")
        .with_patient(2, "Test", "TestBorderline");

    let page = backend.controller().list_patients().await.unwrap();
    match page {
        Page::Render(View::PatientList { patients }) => assert_eq!(patients.len(), 2),
        other => panic!("unexpected page: {:?}", other),
    }
    assert_eq!(backend.calls(), vec![Call::ListPatients]);
}

#[tokio::test]
async fn test_patient_detail_aggregates_in_order() {
    let backend = FakeBackend::default()
        .with_patient(7, "Test", "TestInDanger")
        .with_note("n1", "7", "TestInDanger", "Smoker")
        .with_note("n2", "8", "Other", "Unrelated");

    let page = backend.controller().patient_detail("7").await.unwrap();
    match page {
        Page::Render(View::PatientInfo {
            patient,
            notes,
            risk_level,
        }) => {
            assert_eq!(patient.last_name, "TestInDanger");
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].content, "Smoker");
            assert_eq!(risk_level.patient_id, "7");
            assert_eq!(risk_level.trigger_words_counter, 1);
        }
        other => panic!("unexpected page: {:?}", other),
    }

    assert_eq!(
        backend.calls(),
        vec![
            Call::GetPatient(7),
            Call::ListNotes("7".into()),
            Call::Risk("7".into()),
        ]
    );
}

#[tokio::test]
async fn test_patient_detail_fails_when_risk_service_down() {
    let backend = FakeBackend::default()
        .with_patient(7, "Test", "TestInDanger")
        .risk_down();

    let err = backend.controller().patient_detail("7").await.unwrap_err();
    assert!(matches!(err, PageError::Remote(ClientError::Status { .. })));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_patient_detail_unknown_patient() {
    let backend = FakeBackend::default();
    let err = backend.controller().patient_detail("99").await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    // Stops at the first failure
    assert_eq!(backend.calls(), vec![Call::GetPatient(99)]);
}

#[tokio::test]
async fn test_patient_detail_rejects_non_numeric_id() {
    let backend = FakeBackend::default();
    let err = backend.controller().patient_detail("abc").await.unwrap_err();
    assert!(matches!(err, PageError::InvalidId(IdError::NotNumeric(_))));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_add_patient_creates_exact_fields() {
    let backend = FakeBackend::default();
    let form = patient_form("Lucas", "Ferguson", "1968-06-22", "M");

    let page = backend
        .controller()
        .add_patient(form, today())
        .await
        .unwrap();
    assert_eq!(page, Page::Redirect("/patients".into()));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::CreatePatient(patient) => {
            assert_eq!(patient.id, None);
            assert_eq!(patient.first_name, "Lucas");
            assert_eq!(patient.last_name, "Ferguson");
            assert_eq!(
                patient.birth_date,
                NaiveDate::from_ymd_opt(1968, 6, 22).unwrap()
            );
            assert_eq!(patient.gender, Gender::M);
            assert_eq!(patient.address.as_deref(), Some("3 Club Road"));
            assert_eq!(patient.phone.as_deref(), Some(""));
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_patient_invalid_makes_no_call() {
    let cases = vec![
        patient_form("", "Ferguson", "1968-06-22", "M"),
        patient_form("Lucas", "Ferguson", "2030-01-01", "M"),
        patient_form("Lucas", "Ferguson", "1968-06-22", ""),
    ];

    for form in cases {
        let backend = FakeBackend::default();
        let page = backend
            .controller()
            .add_patient(form.clone(), today())
            .await
            .unwrap();
        match page {
            Page::Render(View::PatientAdd { patient, errors }) => {
                assert_eq!(patient, form);
                assert!(!errors.is_empty());
            }
            other => panic!("unexpected page: {:?}", other),
        }
        assert!(backend.calls().is_empty());
    }
}

#[tokio::test]
async fn test_show_update_patient_prefills() {
    let backend = FakeBackend::default().with_patient(3, "Test", "TestEarlyOnset");
    let page = backend.controller().show_update_patient("3").await.unwrap();
    match page {
        Page::Render(View::PatientUpdate {
            id,
            patient,
            errors,
        }) => {
            assert_eq!(id.get(), 3);
            assert_eq!(patient.last_name.as_deref(), Some("TestEarlyOnset"));
            assert_eq!(patient.birth_date.as_deref(), Some("1970-03-14"));
            assert!(errors.is_empty());
        }
        other => panic!("unexpected page: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_patient() {
    let backend = FakeBackend::default().with_patient(3, "Test", "TestEarlyOnset");
    let form = patient_form("Test", "Renamed", "1970-03-14", "F");

    let page = backend
        .controller()
        .update_patient("3", form, today())
        .await
        .unwrap();
    assert_eq!(page, Page::Redirect("/patients".into()));

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::UpdatePatient(3, patient) => {
            assert_eq!(patient.last_name, "Renamed");
            assert_eq!(patient.gender, Gender::F);
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_update_patient_invalid_redisplays() {
    let backend = FakeBackend::default().with_patient(3, "Test", "TestEarlyOnset");
    let mut form = patient_form("Test", "Renamed", "1970-03-14", "F");
    form.phone = Some("abc".into());

    let page = backend
        .controller()
        .update_patient("3", form, today())
        .await
        .unwrap();
    match page {
        Page::Render(View::PatientUpdate { id, errors, .. }) => {
            assert_eq!(id.get(), 3);
            assert!(errors.has("phone"));
        }
        other => panic!("unexpected page: {:?}", other),
    }
    assert!(backend.calls().is_empty());
}

// =========================================================================
// Note Pages
// =========================================================================

#[tokio::test]
async fn test_add_note_scenario() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");

    let form = NoteForm {
        id: Some("client-chosen".into()),
        patient_id: Some("999".into()),
        patient_name: Some("Stale".into()),
        content: Some("follow-up".into()),
    };
    let page = backend.controller().add_note("42", form).await.unwrap();
    assert_eq!(page, Page::Redirect("/patient/42".into()));

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], Call::GetPatient(42));
    match &calls[1] {
        Call::CreateNote(note) => {
            assert_eq!(note.id, None);
            assert_eq!(note.patient_id, "42");
            assert_eq!(note.patient_name, "Dupont");
            assert_eq!(note.content, "follow-up");
        }
        other => panic!("unexpected call: {:?}", other),
    }

    let stored = backend.state.lock().unwrap().notes.clone();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].id.is_some());
}

#[tokio::test]
async fn test_add_note_uses_canonical_patient_key() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");

    let page = backend
        .controller()
        .add_note("042", note_form("follow-up"))
        .await
        .unwrap();
    assert_eq!(page, Page::Redirect("/patient/42".into()));

    match &backend.calls()[1] {
        Call::CreateNote(note) => assert_eq!(note.patient_id, "42"),
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_note_invalid_redisplays_with_patient() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");

    let page = backend
        .controller()
        .add_note("42", note_form("   "))
        .await
        .unwrap();
    match page {
        Page::Render(View::NoteAdd {
            patient, errors, ..
        }) => {
            assert_eq!(patient.last_name, "Dupont");
            assert!(errors.has("content"));
        }
        other => panic!("unexpected page: {:?}", other),
    }
    assert_eq!(backend.calls(), vec![Call::GetPatient(42)]);
}

#[tokio::test]
async fn test_add_note_non_numeric_id_fails_before_any_call() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");
    let err = backend
        .controller()
        .add_note("forty-two", note_form("follow-up"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_add_note_unknown_patient() {
    let backend = FakeBackend::default();
    let err = backend
        .controller()
        .add_note("5", note_form("follow-up"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(backend.calls(), vec![Call::GetPatient(5)]);
}

#[tokio::test]
async fn test_show_update_note_prefills() {
    let backend = FakeBackend::default()
        .with_patient(4, "Test", "TestEarlyOnset")
        .with_note("n9", "4", "TestEarlyOnset", "Antibodies elevated");

    let page = backend
        .controller()
        .show_update_note("4", "n9")
        .await
        .unwrap();
    match page {
        Page::Render(View::NoteUpdate {
            patient,
            note_id,
            note,
            ..
        }) => {
            assert_eq!(patient.id.map(|id| id.get()), Some(4));
            assert_eq!(note_id, "n9");
            assert_eq!(note.content.as_deref(), Some("Antibodies elevated"));
        }
        other => panic!("unexpected page: {:?}", other),
    }
    assert_eq!(
        backend.calls(),
        vec![Call::GetPatient(4), Call::GetNote("n9".into())]
    );
}

#[tokio::test]
async fn test_update_note_forces_identity() {
    let backend = FakeBackend::default()
        .with_patient(4, "Test", "TestEarlyOnset")
        .with_note("n9", "4", "TestEarlyOnset", "Antibodies elevated");

    let form = NoteForm {
        id: Some("other".into()),
        patient_id: Some("1".into()),
        patient_name: Some("Forged".into()),
        content: Some("Antibodies normal".into()),
    };
    let page = backend
        .controller()
        .update_note("4", "n9", form)
        .await
        .unwrap();
    assert_eq!(page, Page::Redirect("/patient/4".into()));

    match &backend.calls()[1] {
        Call::UpdateNote(id, note) => {
            assert_eq!(id, "n9");
            assert_eq!(note.id.as_deref(), Some("n9"));
            assert_eq!(note.patient_id, "4");
            assert_eq!(note.patient_name, "TestEarlyOnset");
            assert_eq!(note.content, "Antibodies normal");
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_note_name_tracks_current_patient_only_on_write() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");
    let controller = backend.controller();

    controller
        .add_note("42", note_form("first"))
        .await
        .unwrap();
    backend.rename_patient(42, "Martin");
    controller
        .add_note("42", note_form("second"))
        .await
        .unwrap();

    let notes = backend.state.lock().unwrap().notes.clone();
    let names: Vec<_> = notes.iter().map(|n| n.patient_name.as_str()).collect();
    assert_eq!(names, vec!["Dupont", "Martin"]);
}

// =========================================================================
// Router
// =========================================================================

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_router_renders_patient_list() {
    let backend = FakeBackend::default().with_patient(1, "Test", "TestNone");
    let app = router(backend.controller());

    let response = app
        .oneshot(Request::get("/patients").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["template"], "patients/patient-list");
    assert_eq!(json["model"]["patients"][0]["lastName"], "TestNone");
}

#[tokio::test]
async fn test_router_root_redirect() {
    let app = router(FakeBackend::default().controller());
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/patients");
}

#[tokio::test]
async fn test_router_note_form_post() {
    let backend = FakeBackend::default().with_patient(42, "Jean", "Dupont");
    let app = router(backend.controller());

    let response = app
        .oneshot(
            Request::post("/patient/42/note/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("content=follow-up&patientName=Stale"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/patient/42");

    match &backend.calls()[1] {
        Call::CreateNote(note) => assert_eq!(note.patient_name, "Dupont"),
        other => panic!("unexpected call: {:?}", other),
    }
}

#[tokio::test]
async fn test_router_patient_form_redisplay() {
    let backend = FakeBackend::default();
    let app = router(backend.controller());

    let response = app
        .oneshot(
            Request::post("/patient/add")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("firstName=&lastName=Ferguson&birthDate=1968-06-22&gender=M"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["template"], "patients/patient-add");
    assert_eq!(json["model"]["patient"]["lastName"], "Ferguson");
    assert_eq!(json["model"]["errors"][0]["field"], "firstName");
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_router_static_routes_win_over_ids() {
    let backend = FakeBackend::default();
    let app = router(backend.controller());

    let response = app
        .oneshot(Request::get("/patient/add").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["template"], "patients/patient-add");
}

#[tokio::test]
async fn test_router_bad_id_is_client_error() {
    let app = router(FakeBackend::default().controller());
    let response = app
        .oneshot(Request::get("/patient/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("abc"));
}

// =========================================================================
// Properties
// =========================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn valid_patient_yields_single_exact_create(
            first in "[A-Za-z][A-Za-z -]{0,20}",
            last in "[A-Za-z][A-Za-z -]{0,20}",
            days_ago in 1i64..40_000,
            female in any::<bool>(),
        ) {
            let birth = today() - chrono::Duration::days(days_ago);
            let gender = if female { "F" } else { "M" };
            let form = patient_form(&first, &last, &birth.format("%Y-%m-%d").to_string(), gender);

            let backend = FakeBackend::default();
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let page = runtime
                .block_on(backend.controller().add_patient(form, today()))
                .unwrap();
            prop_assert_eq!(page, Page::Redirect("/patients".into()));

            let calls = backend.calls();
            prop_assert_eq!(calls.len(), 1);
            match &calls[0] {
                Call::CreatePatient(patient) => {
                    prop_assert_eq!(&patient.first_name, &first);
                    prop_assert_eq!(&patient.last_name, &last);
                    prop_assert_eq!(patient.birth_date, birth);
                    prop_assert_eq!(patient.gender.code(), gender);
                }
                other => prop_assert!(false, "unexpected call: {:?}", other),
            }
        }

        #[test]
        fn note_identity_comes_from_path_and_patient(
            id in 1u32..100_000,
            forged_id in "[0-9a-z]{0,8}",
            forged_name in "[A-Za-z]{0,12}",
            content in "[a-z][a-z ]{0,40}",
        ) {
            let backend = FakeBackend::default().with_patient(id, "Jean", "Current");
            let form = NoteForm {
                id: Some(forged_id.clone()),
                patient_id: Some(forged_id),
                patient_name: Some(forged_name),
                content: Some(content.clone()),
            };

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime
                .block_on(backend.controller().add_note(&id.to_string(), form))
                .unwrap();

            match &backend.calls()[1] {
                Call::CreateNote(note) => {
                    prop_assert_eq!(note.id.as_deref(), None);
                    prop_assert_eq!(note.patient_id.clone(), id.to_string());
                    prop_assert_eq!(note.patient_name.as_str(), "Current");
                    prop_assert_eq!(&note.content, &content);
                }
                other => prop_assert!(false, "unexpected call: {:?}", other),
            }
        }
    }
}
