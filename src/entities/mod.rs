//! Entity module - Contains the data models for the studio domain.
//! Each entity has a plain serde-enabled struct, a `New*` payload carrying the
//! caller-supplied fields for `add` operations, and a `*Patch` type expressing
//! a shallow field-level merge for `update` operations.

pub mod booking;
pub mod client;
pub mod gallery;
pub mod package;
pub mod referral;
pub mod reminder;

pub use booking::{Booking, BookingPatch, BookingStatus, NewBooking};
pub use client::{Client, ClientPatch, NewClient};
pub use gallery::{DeliveryStatus, Gallery, GalleryPatch, NewGallery};
pub use package::{NewPackage, Package, PackagePatch};
pub use referral::{NewReferral, Referral, ReferralPatch, ReferralStatus};
pub use reminder::{NewReminder, Reminder, ReminderKind, ReminderPatch};
