use super::list::state::BookingRow;
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::booking::BookingStatus;
use leptos::prelude::*;

fn status_color(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Scheduled => "primary",
        BookingStatus::Active => "success",
        BookingStatus::Completed => "warning",
    }
}

#[component]
pub fn BookingCard(row: BookingRow) -> impl IntoView {
    let i18n = use_i18n();

    let status = row.booking.status_at(Utc::now());
    let status_key = format!("pages.bookings.filters.status.{}", status.as_str());
    let date = format_date(&row.booking.start_time);
    let time_range = format!(
        "{} - {}",
        format_time(&row.booking.start_time),
        format_time(&row.booking.end_time)
    );
    let lecturer_count = row.booking.lecturer_ids.len();
    let student_group_count = row.booking.student_group_ids.len();
    let room_name = row.room_name.clone();
    let building_name = row.building_name.clone();

    view! {
        <div class="card booking-card">
            <div class="booking-card__header">
                <span class="booking-card__icon">{icon("calendar")}</span>
                <h3 class="booking-card__title">{room_name}</h3>
                <span class=format!("badge badge--{}", status_color(status))>
                    {move || i18n.t(&status_key)}
                </span>
            </div>
            <div class="booking-card__details">
                <span class="booking-card__detail">
                    {icon("map-pin")}
                    {building_name}
                </span>
                <span class="booking-card__detail">
                    {icon("calendar")}
                    {date}
                </span>
                <span class="booking-card__detail">
                    {icon("clock")}
                    {time_range}
                </span>
                <span class="booking-card__detail">
                    {icon("user")}
                    {move || format!(
                        "{} {}",
                        lecturer_count,
                        i18n.t("pages.bookings.labels.lecturers")
                    )}
                </span>
                <span class="booking-card__detail">
                    {icon("users")}
                    {move || format!(
                        "{} {}",
                        student_group_count,
                        i18n.t("pages.bookings.labels.studentGroups")
                    )}
                </span>
            </div>
        </div>
    }
}
