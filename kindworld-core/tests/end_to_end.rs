use kindworld_core::{
    Action, AppStore, CertificateKind, Level, Page, Role, certificate_file_name,
};

fn volunteer_on_certificates() -> AppStore {
    AppStore::from_static(2024)
        .reduce(Action::Navigate(Page::SignIn))
        .reduce(Action::SelectRole(Role::Volunteer))
        .reduce(Action::BeginSignIn(Role::Volunteer))
        .reduce(Action::CompleteSignIn)
        .reduce(Action::Navigate(Page::Certificates))
}

#[test]
fn volunteer_journey_reaches_certificates_with_seeded_hours() {
    let store = volunteer_on_certificates();
    assert_eq!(store.page(), Page::Certificates);
    assert_eq!(store.viewer_hours(), 530);
    assert_eq!(
        store.user().map(|u| u.name.as_str()),
        Some("Sarah Johnson")
    );
}

#[test]
fn thresholds_split_into_earned_and_deficit() {
    let store = volunteer_on_certificates();
    for status in store.certificate_statuses() {
        let required = status.certificate.required_hours;
        assert_eq!(status.earned, required <= 530, "{}", status.certificate.id);
        assert!(status.progress_pct <= 100);
        if status.earned {
            assert_eq!(status.deficit, 0);
            assert_eq!(status.progress_pct, 100);
        } else {
            assert_eq!(status.deficit, required - 530);
        }
    }
    let hero = store
        .certificate_statuses()
        .into_iter()
        .find(|s| s.certificate.id == "cert-community-hero")
        .map(|s| s.deficit);
    assert_eq!(hero, Some(220));
    let lifetime = store
        .certificate_statuses()
        .into_iter()
        .find(|s| s.certificate.id == "cert-lifetime-impact")
        .map(|s| s.deficit);
    assert_eq!(lifetime, Some(470));
}

#[test]
fn every_earned_certificate_downloads() {
    let mut store = volunteer_on_certificates();
    let earned: Vec<_> = store
        .certificate_statuses()
        .into_iter()
        .filter(|s| s.earned)
        .map(|s| (s.certificate.id.clone(), s.certificate.name.clone(), s.certificate.kind))
        .collect();
    assert_eq!(earned.len(), 4);

    for (id, _, _) in &earned {
        store.apply(Action::DownloadCertificate {
            id: id.clone(),
            issued_on: String::from("2024-07-01"),
            now_ms: 1_720_000_000_000,
        });
    }

    assert_eq!(store.downloads().len(), earned.len());
    for (doc, (id, name, kind)) in store.downloads().iter().zip(&earned) {
        assert_eq!(&doc.certificate_id, id);
        assert_eq!(doc.file_name, certificate_file_name(name));
        assert!(doc.body.contains("Sarah Johnson"));
        assert!(doc.body.contains(name.as_str()));
        assert!(doc.body.contains("2024-07-01"));
        assert!(doc.body.contains(&doc.serial));
        if *kind == CertificateKind::Medal {
            assert!(doc.body.contains("MEDAL"));
        }
    }
    let confirmations = store
        .notifications()
        .items()
        .iter()
        .filter(|n| n.level == Level::Success && n.message.contains("downloaded"))
        .count();
    assert!(confirmations >= 1);
}

#[test]
fn gold_medal_file_name_uses_underscores() {
    assert_eq!(
        certificate_file_name("Gold Volunteer Medal"),
        "Gold_Volunteer_Medal_Certificate.txt"
    );
}
