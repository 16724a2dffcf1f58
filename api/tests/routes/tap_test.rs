#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_seeded_app};
    use axum::{
        Router,
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use chrono::NaiveDate;
    use db::models::attendance;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_tap(app: &Router, body: impl Into<AxumBody>) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/api/tap")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    fn stamp(day: NaiveDate, time: &str) -> String {
        format!("{}T{time}", day.format("%Y-%m-%d"))
    }

    #[tokio::test]
    async fn card_tap_during_lecture_is_recorded() {
        let (app, state, today) = make_seeded_app().await;

        let payload = json!({
            "credential": "04A1B2C3D4",
            "credential_type": "card",
            "reader_id": "reader-it101",
            "tapped_at": stamp(today, "09:15:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["student"], "Aoife O'Brien");
        assert_eq!(json["lecture_id"], 1);

        let rows = attendance::Entity::find().all(state.db()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_id, 1);
        assert_eq!(rows[0].method, "NFC");
        assert_eq!(rows[0].credential_type, "card");
        assert_eq!(rows[0].tapped_at.format("%H:%M:%S").to_string(), "09:15:00");
    }

    #[tokio::test]
    async fn mobile_token_resolves_student() {
        let (app, state, today) = make_seeded_app().await;

        let payload = json!({
            "credential": "mtu-token-niamh",
            "credential_type": "mobile",
            "reader_id": "reader-eng202",
            "method": "NFC",
            "tapped_at": stamp(today, "11:30:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["student"], "Niamh Kelly");
        assert_eq!(json["lecture_id"], 2);

        let row = attendance::Entity::find().one(state.db()).await.unwrap().unwrap();
        assert_eq!(row.credential_type, "mobile");
    }

    #[tokio::test]
    async fn unknown_credential_is_rejected_without_writing() {
        let (app, state, today) = make_seeded_app().await;

        let payload = json!({
            "credential": "04FFFFFFFF",
            "reader_id": "reader-it101",
            "tapped_at": stamp(today, "09:15:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"status": "error", "message": "Unknown credential"}));
        assert_eq!(attendance::Entity::find().count(state.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn interval_ends_are_inclusive() {
        let (app, state, today) = make_seeded_app().await;

        for time in ["09:00:00", "10:00:00"] {
            let payload = json!({
                "credential": "0499AA77BB",
                "reader_id": "reader-it101",
                "tapped_at": stamp(today, time),
            });
            let (status, json) = post_tap(&app, payload.to_string()).await;
            assert_eq!(status, StatusCode::OK, "{time}");
            assert_eq!(json["lecture_id"], 1, "{time}");
        }
        assert_eq!(attendance::Entity::find().count(state.db()).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn tap_outside_any_lecture_is_rejected() {
        let (app, state, today) = make_seeded_app().await;

        for (reader, time) in [
            ("reader-it101", "08:59:59"),
            ("reader-it101", "10:00:01"),
            ("reader-it101", "11:30:00"),
            ("reader-unknown", "09:30:00"),
        ] {
            let payload = json!({
                "credential": "0499AA77BB",
                "reader_id": reader,
                "tapped_at": stamp(today, time),
            });
            let (status, json) = post_tap(&app, payload.to_string()).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{reader} {time}");
            assert_eq!(json["message"], "No lecture in session", "{reader} {time}");
        }
        assert_eq!(attendance::Entity::find().count(state.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn double_tap_records_two_rows() {
        let (app, state, today) = make_seeded_app().await;

        for time in ["09:05:00", "09:06:00"] {
            let payload = json!({
                "credential": "04A1B2C3D4",
                "reader_id": "reader-it101",
                "tapped_at": stamp(today, time),
            });
            let (status, _) = post_tap(&app, payload.to_string()).await;
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(
            attendance::Model::count_for_lecture(state.db(), 1).await.unwrap(),
            2
        );
        assert_eq!(
            attendance::Model::attended_lecture_count(state.db(), 1)
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn malformed_body_is_an_unknown_credential() {
        let (app, _, _) = make_seeded_app().await;

        let (status, json) = post_tap(&app, "{not json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Unknown credential");

        let (status, json) = post_tap(&app, AxumBody::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Unknown credential");
    }

    #[tokio::test]
    async fn unparseable_time_finds_no_lecture() {
        let (app, _, _) = make_seeded_app().await;

        let payload = json!({
            "credential": "04A1B2C3D4",
            "reader_id": "reader-it101",
            "tapped_at": "yesterday-ish",
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No lecture in session");
    }

    #[tokio::test]
    async fn missing_reader_finds_no_lecture() {
        let (app, _, today) = make_seeded_app().await;

        let payload = json!({
            "credential": "04A1B2C3D4",
            "tapped_at": stamp(today, "09:30:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No lecture in session");
    }

    #[tokio::test]
    async fn non_string_reader_keeps_credential_lookup() {
        let (app, state, today) = make_seeded_app().await;

        let payload = json!({
            "credential": "04A1B2C3D4",
            "reader_id": 101,
            "tapped_at": stamp(today, "09:30:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No lecture in session");
        assert_eq!(attendance::Entity::find().count(state.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn non_string_time_finds_no_lecture() {
        let (app, state, _) = make_seeded_app().await;

        let payload = json!({
            "credential": "04A1B2C3D4",
            "reader_id": "reader-it101",
            "tapped_at": 12345,
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "No lecture in session");
        assert_eq!(attendance::Entity::find().count(state.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn non_string_credential_is_unknown() {
        let (app, _, today) = make_seeded_app().await;

        let payload = json!({
            "credential": 42,
            "reader_id": "reader-it101",
            "tapped_at": stamp(today, "09:30:00"),
        });
        let (status, json) = post_tap(&app, payload.to_string()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Unknown credential");
    }
}
