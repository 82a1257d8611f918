//! Application store: every piece of UI state plus the typed actions that change it
//!
//! The web layer wraps [`AppStore`] in a reducer and only ever talks to it by
//! dispatching [`Action`]s. Timers (sign-in latency, toast expiry) live outside
//! and dispatch their completion back in, so they always act on the latest state.
use crate::certificates::{CertificateCatalog, CertificateDocument, CertificateId, CertificateStatus};
use crate::config::AppConfig;
use crate::directory::UserDirectory;
use crate::drafts::{
    ActivityDraft, ActivityField, CertificateDraft, CertificateField, UserEditDraft, UserField,
};
use crate::ids::CertificateIdGenerator;
use crate::missions::{
    JoinedFilter, Membership, Mission, MissionError, MissionFilter, MissionId, MissionRegistry,
};
use crate::model::{MonthlyHours, PlatformStats, Role, User, monthly_bar_heights};
use crate::notifications::{Level, NotificationId, NotificationQueue};
use crate::page::{Page, navigation_allowed};
use crate::seed::{SeedCatalog, identity_in};
use serde::{Deserialize, Serialize};

pub const MSG_VALIDATION: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    CreateActivity,
    CertificateTemplate,
    EditUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Session {
    pub user: Option<User>,
    pub selected_role: Role,
    /// Role whose sign-in is in flight, if any.
    pub signing_in: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(Page),
    SelectRole(Role),
    BeginSignIn(Role),
    CompleteSignIn,
    Logout,
    ToggleMission(MissionId),
    SetMissionQuery(String),
    SetMissionCategory(Option<String>),
    SetJoinedFilter(JoinedFilter),
    OpenModal(Modal),
    CloseModal,
    EditActivity(ActivityField, String),
    SubmitActivity,
    EditCertificate(CertificateField, String),
    SubmitCertificate,
    BeginUserEdit(u32),
    EditUser(UserField, String),
    SubmitUserEdit,
    DownloadCertificate {
        id: CertificateId,
        issued_on: String,
        now_ms: u64,
    },
    Notify(Level, String),
    Dismiss(NotificationId),
    Expire(NotificationId),
    SetLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppStore {
    config: AppConfig,
    page: Page,
    session: Session,
    language: String,
    missions: MissionRegistry,
    mission_filter: MissionFilter,
    certificates: CertificateCatalog,
    directory: UserDirectory,
    notifications: NotificationQueue,
    modal: Option<Modal>,
    activity_draft: ActivityDraft,
    certificate_draft: CertificateDraft,
    user_draft: UserEditDraft,
    downloads: Vec<CertificateDocument>,
    identities: Vec<User>,
    monthly_hours: Vec<MonthlyHours>,
    stats: PlatformStats,
    #[serde(skip)]
    ids: CertificateIdGenerator,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppConfig::default(), SeedCatalog::default(), 0)
    }
}

impl AppStore {
    #[must_use]
    pub fn new(config: AppConfig, seed: SeedCatalog, id_seed: u64) -> Self {
        let notifications =
            NotificationQueue::new(config.notification_ttl_ms, config.max_notifications);
        Self {
            config,
            page: Page::Landing,
            session: Session::default(),
            language: String::from("en"),
            missions: MissionRegistry::new(seed.missions),
            mission_filter: MissionFilter::default(),
            certificates: CertificateCatalog::new(seed.certificates),
            directory: UserDirectory::new(seed.directory),
            notifications,
            modal: None,
            activity_draft: ActivityDraft::default(),
            certificate_draft: CertificateDraft::default(),
            user_draft: UserEditDraft::default(),
            downloads: Vec::new(),
            identities: seed.users,
            monthly_hours: seed.monthly_hours,
            stats: seed.stats,
            ids: CertificateIdGenerator::new(id_seed),
        }
    }

    /// Store booted from the embedded config and seed catalog.
    #[must_use]
    pub fn from_static(id_seed: u64) -> Self {
        Self::new(
            AppConfig::load_from_static(),
            SeedCatalog::load_from_static(),
            id_seed,
        )
    }

    /// Consume `action`, returning the next state.
    #[must_use]
    pub fn reduce(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    pub fn apply(&mut self, action: Action) {
        log::debug!("store action: {action:?}");
        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::SelectRole(role) => {
                if self.session.signing_in.is_none() {
                    self.session.selected_role = role;
                }
            }
            Action::BeginSignIn(role) => self.begin_sign_in(role),
            Action::CompleteSignIn => self.complete_sign_in(),
            Action::Logout => self.logout(),
            Action::ToggleMission(id) => self.toggle_mission(id),
            Action::SetMissionQuery(query) => self.mission_filter.query = query,
            Action::SetMissionCategory(category) => self.mission_filter.category = category,
            Action::SetJoinedFilter(joined) => self.mission_filter.joined = joined,
            Action::OpenModal(modal) => self.open_modal(modal),
            Action::CloseModal => self.close_modal(),
            Action::EditActivity(field, value) => self.activity_draft.set(field, value),
            Action::SubmitActivity => self.submit_activity(),
            Action::EditCertificate(field, value) => self.certificate_draft.set(field, value),
            Action::SubmitCertificate => self.submit_certificate(),
            Action::BeginUserEdit(id) => self.begin_user_edit(id),
            Action::EditUser(field, value) => self.user_draft.set(field, value),
            Action::SubmitUserEdit => self.submit_user_edit(),
            Action::DownloadCertificate {
                id,
                issued_on,
                now_ms,
            } => self.download_certificate(&id, &issued_on, now_ms),
            Action::Notify(level, message) => {
                self.notifications.enqueue(level, message);
            }
            Action::Dismiss(id) | Action::Expire(id) => {
                self.notifications.remove(id);
            }
            Action::SetLanguage(code) => self.language = code,
        }
    }

    fn notify(&mut self, level: Level, message: impl Into<String>) {
        self.notifications.enqueue(level, message);
    }

    fn navigate(&mut self, page: Page) {
        if navigation_allowed(self.page, page, self.is_signed_in()) {
            if self.page == Page::SignIn && page != Page::SignIn {
                if let Some(role) = self.session.signing_in.take() {
                    log::info!("sign-in as {role} abandoned");
                }
            }
            self.page = page;
        } else {
            log::warn!("navigation {:?} -> {page:?} refused", self.page);
        }
    }

    fn begin_sign_in(&mut self, role: Role) {
        if self.session.signing_in.is_some() || self.is_signed_in() {
            log::warn!("sign-in as {role} ignored");
            return;
        }
        self.session.selected_role = role;
        self.session.signing_in = Some(role);
    }

    fn complete_sign_in(&mut self) {
        if self.page != Page::SignIn {
            self.session.signing_in = None;
            log::warn!("sign-in completion arrived on {:?}", self.page);
            return;
        }
        let Some(role) = self.session.signing_in.take() else {
            log::warn!("sign-in completion with nothing in flight");
            return;
        };
        let user = identity_in(&self.identities, role);
        let first = user.first_name().to_string();
        self.session.user = Some(user);
        self.page = Page::Dashboard;
        self.notify(Level::Success, format!("Welcome back, {first}!"));
        let upcoming = self.missions.joined().len();
        self.notify(
            Level::Info,
            format!("You have {upcoming} upcoming missions this week."),
        );
    }

    fn logout(&mut self) {
        if !self.is_signed_in() {
            return;
        }
        self.session = Session {
            selected_role: self.session.selected_role,
            ..Session::default()
        };
        self.modal = None;
        self.activity_draft = ActivityDraft::default();
        self.certificate_draft = CertificateDraft::default();
        self.user_draft = UserEditDraft::default();
        self.page = Page::Landing;
        self.notify(Level::Info, "You have been signed out.");
    }

    fn toggle_mission(&mut self, id: MissionId) {
        let outcome = self
            .missions
            .toggle_join(id)
            .map(|(membership, mission)| (membership, mission.title.clone()));
        match outcome {
            Ok((Membership::Joined, title)) => {
                self.notify(Level::Success, format!("You joined \"{title}\"!"));
            }
            Ok((Membership::Left, title)) => {
                self.notify(Level::Info, format!("You left \"{title}\"."));
            }
            Err(MissionError::UnknownMission(id)) => {
                log::warn!("toggle on unknown mission {id}");
            }
            Err(MissionError::Full { title, .. }) => {
                self.notify(
                    Level::Warning,
                    format!("\"{title}\" is full. Try another mission."),
                );
            }
        }
    }

    fn open_modal(&mut self, modal: Modal) {
        let Some(role) = self.user().map(|u| u.role) else {
            log::warn!("modal {modal:?} requested without a session");
            return;
        };
        let permitted = match modal {
            Modal::CreateActivity | Modal::CertificateTemplate => role.can_publish(),
            Modal::EditUser => role.can_manage_users() && self.user_draft.user_id.is_some(),
        };
        if permitted {
            self.modal = Some(modal);
        } else {
            log::warn!("modal {modal:?} refused for {role}");
        }
    }

    fn close_modal(&mut self) {
        match self.modal.take() {
            Some(Modal::CreateActivity) => self.activity_draft = ActivityDraft::default(),
            Some(Modal::CertificateTemplate) => {
                self.certificate_draft = CertificateDraft::default();
            }
            Some(Modal::EditUser) => self.user_draft = UserEditDraft::default(),
            None => {}
        }
    }

    fn submit_activity(&mut self) {
        if self.modal != Some(Modal::CreateActivity) {
            return;
        }
        match self.activity_draft.validate() {
            Ok(new) => {
                let organizer = self
                    .user()
                    .map_or_else(|| self.config.default_organizer.clone(), |u| u.name.clone());
                let title = self.missions.create(new, &organizer).title.clone();
                self.close_modal();
                self.notify(
                    Level::Success,
                    format!("Activity \"{title}\" created successfully!"),
                );
            }
            Err(err) => {
                log::warn!("activity draft rejected: {err}");
                self.notify(Level::Warning, MSG_VALIDATION);
            }
        }
    }

    fn submit_certificate(&mut self) {
        if self.modal != Some(Modal::CertificateTemplate) {
            return;
        }
        match self.certificate_draft.validate() {
            Ok(new) => {
                let name = self.certificates.add(new).name.clone();
                self.close_modal();
                self.notify(
                    Level::Success,
                    format!("Certificate template \"{name}\" created!"),
                );
            }
            Err(err) => {
                log::warn!("certificate draft rejected: {err}");
                self.notify(Level::Warning, MSG_VALIDATION);
            }
        }
    }

    fn begin_user_edit(&mut self, id: u32) {
        if !self.user().is_some_and(|u| u.role.can_manage_users()) {
            log::warn!("user edit requested without admin session");
            return;
        }
        let Some(target) = self.directory.get(id) else {
            log::warn!("edit requested for unknown directory user {id}");
            return;
        };
        self.user_draft = UserEditDraft::from_user(target);
        self.modal = Some(Modal::EditUser);
    }

    fn submit_user_edit(&mut self) {
        if self.modal != Some(Modal::EditUser) {
            return;
        }
        let edit = match self.user_draft.validate() {
            Ok(edit) => edit,
            Err(err) => {
                log::warn!("user draft rejected: {err}");
                self.notify(Level::Warning, MSG_VALIDATION);
                return;
            }
        };
        match self.directory.apply(edit).map(|u| u.name.clone()) {
            Ok(name) => {
                self.close_modal();
                self.notify(Level::Success, format!("User {name} updated successfully!"));
            }
            Err(err) => {
                log::warn!("user edit failed: {err}");
                self.close_modal();
            }
        }
    }

    fn download_certificate(&mut self, id: &str, issued_on: &str, now_ms: u64) {
        let Some(user) = self.session.user.as_ref() else {
            return;
        };
        let serial = self.ids.next_id(now_ms);
        match self
            .certificates
            .issue(id, &user.name, user.hours, issued_on, serial)
        {
            Ok(document) => {
                let name = self
                    .certificates
                    .get(id)
                    .map_or_else(|| document.file_name.clone(), |c| c.name.clone());
                self.downloads.push(document);
                self.notify(
                    Level::Success,
                    format!("Certificate \"{name}\" downloaded!"),
                );
            }
            Err(err) => log::warn!("certificate download refused: {err}"),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.session.user.is_some()
    }

    #[must_use]
    pub const fn is_signing_in(&self) -> bool {
        self.session.signing_in.is_some()
    }

    /// Hours of the signed-in user; zero while signed out.
    #[must_use]
    pub fn viewer_hours(&self) -> u32 {
        self.user().map_or(0, |u| u.hours)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn missions(&self) -> &MissionRegistry {
        &self.missions
    }

    #[must_use]
    pub const fn mission_filter(&self) -> &MissionFilter {
        &self.mission_filter
    }

    #[must_use]
    pub fn visible_missions(&self) -> Vec<&Mission> {
        self.missions.filtered(&self.mission_filter).collect()
    }

    #[must_use]
    pub fn upcoming_missions(&self) -> Vec<&Mission> {
        self.missions.joined()
    }

    #[must_use]
    pub const fn certificates(&self) -> &CertificateCatalog {
        &self.certificates
    }

    #[must_use]
    pub fn certificate_statuses(&self) -> Vec<CertificateStatus<'_>> {
        self.certificates.statuses(self.viewer_hours())
    }

    #[must_use]
    pub const fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    #[must_use]
    pub const fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[must_use]
    pub const fn activity_draft(&self) -> &ActivityDraft {
        &self.activity_draft
    }

    #[must_use]
    pub const fn certificate_draft(&self) -> &CertificateDraft {
        &self.certificate_draft
    }

    #[must_use]
    pub const fn user_draft(&self) -> &UserEditDraft {
        &self.user_draft
    }

    /// Documents generated this session, oldest first.
    #[must_use]
    pub fn downloads(&self) -> &[CertificateDocument] {
        &self.downloads
    }

    #[must_use]
    pub fn monthly_hours(&self) -> &[MonthlyHours] {
        &self.monthly_hours
    }

    #[must_use]
    pub fn monthly_bars(&self) -> Vec<u8> {
        monthly_bar_heights(&self.monthly_hours)
    }

    #[must_use]
    pub const fn stats(&self) -> PlatformStats {
        self.stats
    }

    /// Flat, serializable view consumed by automated browser checks.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            page: self.page,
            signed_in: self.is_signed_in(),
            signing_in: self.is_signing_in(),
            user_name: self.user().map(|u| u.name.clone()),
            role: self.user().map(|u| u.role),
            hours: self.viewer_hours(),
            language: self.language.clone(),
            modal: self.modal,
            notifications: self
                .notifications
                .items()
                .iter()
                .map(|n| n.message.clone())
                .collect(),
            missions: self
                .missions
                .all()
                .iter()
                .map(|m| MissionSnapshot {
                    id: m.id,
                    joined: m.joined,
                    current: m.current_participants,
                    max: m.max_participants,
                })
                .collect(),
            certificates: self
                .certificate_statuses()
                .into_iter()
                .map(|s| CertificateSnapshot {
                    id: s.certificate.id.clone(),
                    earned: s.earned,
                    progress_pct: s.progress_pct,
                    deficit: s.deficit,
                })
                .collect(),
            downloads: self.downloads.iter().map(|d| d.file_name.clone()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub id: MissionId,
    pub joined: bool,
    pub current: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSnapshot {
    pub id: CertificateId,
    pub earned: bool,
    pub progress_pct: u8,
    pub deficit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub page: Page,
    pub signed_in: bool,
    pub signing_in: bool,
    pub user_name: Option<String>,
    pub role: Option<Role>,
    pub hours: u32,
    pub language: String,
    pub modal: Option<Modal>,
    pub notifications: Vec<String>,
    pub missions: Vec<MissionSnapshot>,
    pub certificates: Vec<CertificateSnapshot>,
    pub downloads: Vec<String>,
}
