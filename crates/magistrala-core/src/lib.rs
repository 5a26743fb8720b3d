//! # Magistrala Core
//!
//! Plain records mirroring the JSON shapes exchanged with the Magistrala
//! platform services.
//!
//! This crate provides:
//! - Entity records (users, clients, channels, groups, domains, ...)
//! - Page envelopes returned by list endpoints
//! - Query parameter records and their query-string serialization
//!
//! Every optional field is omitted from serialized output when unset and
//! defaults to `None` when the server leaves it out.

#![warn(clippy::all)]

pub mod alarms;
pub mod common;
pub mod entities;
pub mod identity;
pub mod messaging;
pub mod provisioning;
pub mod query;
pub mod reports;
pub mod roles;
pub mod rules;

pub use alarms::{Alarm, AlarmStatus, AlarmsPage};
pub use common::{ConnectionType, EntityRef, Metadata, Response, Status};
pub use entities::{
    Channel, ChannelBasicInfo, ChannelsPage, Client, ClientBasicInfo, ClientCredentials,
    ClientsPage, Group, GroupBasicInfo, GroupsPage, HierarchyPage,
};
pub use identity::{
    Domain, DomainBasicInfo, DomainsPage, EntityType, Invitation, InvitationsPage, Login,
    Operation, PatStatus, PATsPage, Scope, ScopesPage, Token, User, UserBasicInfo,
    UserCredentials, UsersPage, PAT,
};
pub use messaging::{
    ClientTelemetry, HealthInfo, Journal, JournalsPage, MessagesPage, SenMLMessage,
};
pub use provisioning::{BootstrapConfig, BootstrapPage, Cert, CertsPage};
pub use query::{
    query_pairs, AlarmPageMeta, BasicPageMeta, HierarchyPageMeta, InvitationPageMeta,
    JournalsPageMetadata, MembersRolePageQuery, MessagesPageMetadata, PageMetadata,
    PatPageMeta, QueryError, QueryParams, RulesPageMetadata, ScopesPageMeta,
};
pub use reports::{
    AggConfig, Aggregation, EmailSetting, Format, Metric, MetricConfig, Report, ReportConfig,
    ReportConfigPage, ReportFile, ReportPage, ReqMetric, Template,
};
pub use roles::{
    MemberRoleActions, MemberRoles, MemberRolesPage, MembersPage, Role, RolePage,
    RoleProvision,
};
pub use rules::{Output, OutputType, Recurring, Rule, RuleStatus, RulesPage, Schedule, Script};
