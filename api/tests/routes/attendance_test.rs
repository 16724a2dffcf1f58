#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_seeded_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, NaiveTime};
    use db::models::attendance;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder().uri(uri).body(AxumBody::empty()).unwrap()
    }

    #[tokio::test]
    async fn lists_joined_entries_newest_first() {
        let (app, state, today) = make_seeded_app().await;
        let at = |h, m| today.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        attendance::Model::record(state.db(), 1, 1, at(9, 5), "NFC", "card")
            .await
            .unwrap();
        attendance::Model::record(state.db(), 3, 2, at(11, 5), "NFC", "mobile")
            .await
            .unwrap();

        let response = app.oneshot(get("/api/attendance")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["student"], "Niamh Kelly");
        assert_eq!(data[0]["module_code"], "EE305");
        assert_eq!(data[0]["credential_type"], "mobile");
        assert_eq!(
            data[0]["tapped_at"],
            format!("{}T11:05:00", today.format("%Y-%m-%d"))
        );
        assert_eq!(data[1]["student_id"], 1);
        assert_eq!(data[1]["module_name"], "Distributed Systems");
    }

    #[tokio::test]
    async fn filters_by_lecture_student_and_date() {
        let (app, state, today) = make_seeded_app().await;
        let at = |h, m| today.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        attendance::Model::record(state.db(), 2, 1, at(9, 5), "NFC", "card")
            .await
            .unwrap();
        attendance::Model::record(state.db(), 2, 2, at(11, 5), "NFC", "card")
            .await
            .unwrap();
        attendance::Model::record(state.db(), 3, 2, at(11, 6) - Duration::days(1), "NFC", "card")
            .await
            .unwrap();

        let count = |json: serde_json::Value| json["data"].as_array().unwrap().len();

        let by_lecture = app
            .clone()
            .oneshot(get("/api/attendance?lecture_id=2"))
            .await
            .unwrap();
        assert_eq!(count(body_json(by_lecture).await), 2);

        let by_student = app
            .clone()
            .oneshot(get("/api/attendance?student_id=2&lecture_id=1"))
            .await
            .unwrap();
        assert_eq!(count(body_json(by_student).await), 1);

        let day = today.format("%Y-%m-%d");
        let by_day = app
            .oneshot(get(&format!(
                "/api/attendance?start_date={day}&end_date={day}"
            )))
            .await
            .unwrap();
        let json = body_json(by_day).await;
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|e| e["student_id"] == 2));
    }

    #[tokio::test]
    async fn invalid_date_is_a_bad_request() {
        let (app, _, _) = make_seeded_app().await;

        let response = app
            .oneshot(get("/api/attendance?start_date=19-10-2026"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["message"], "Invalid start_date, expected YYYY-MM-DD");
    }
}
