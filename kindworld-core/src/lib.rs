//! KindWorld core
//!
//! Platform-agnostic state and domain logic for the KindWorld volunteering app.
//! This crate has no UI or browser dependencies; the web and tester crates
//! drive it exclusively through [`AppStore`] and [`Action`].
#![forbid(unsafe_code)]

pub mod certificates;
pub mod config;
pub mod directory;
pub mod drafts;
pub mod ids;
pub mod missions;
pub mod model;
pub mod notifications;
pub mod page;
pub mod seed;
pub mod store;

pub use certificates::{
    Certificate, CertificateCatalog, CertificateDocument, CertificateError, CertificateId,
    CertificateKind, CertificateStatus, NewCertificate, certificate_file_name, is_earned,
    progress_pct, render_certificate_text,
};
pub use config::AppConfig;
pub use directory::{DirectoryError, DirectoryUser, UserDirectory, UserEdit, UserStatus};
pub use drafts::{
    ACTIVITY_CATEGORIES, ActivityDraft, ActivityField, CertificateDraft, CertificateField,
    DraftError, UserEditDraft, UserField,
};
pub use ids::CertificateIdGenerator;
pub use missions::{
    Difficulty, JoinedFilter, Membership, Mission, MissionError, MissionFilter, MissionId,
    MissionRegistry, NewMission,
};
pub use model::{Badge, MonthlyHours, PlatformStats, Role, User, monthly_bar_heights};
pub use notifications::{Level, Notification, NotificationId, NotificationQueue};
pub use page::{Page, navigation_allowed};
pub use seed::{CatalogError, SeedCatalog};
pub use store::{
    Action, AppStore, CertificateSnapshot, MSG_VALIDATION, MissionSnapshot, Modal, Session,
    StoreSnapshot,
};
