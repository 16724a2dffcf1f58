#[cfg(test)]
mod tests {
    use crate::helpers::{body_string, make_seeded_app};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use db::models::attendance;
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder().uri(uri).body(AxumBody::empty()).unwrap()
    }

    fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        day.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    /// Niamh taps first, then Declan twice, all for EE305.
    async fn tap_ee305(db: &DatabaseConnection, day: NaiveDate) {
        attendance::Model::record(db, 3, 2, at(day, 11, 2), "NFC", "mobile")
            .await
            .unwrap();
        attendance::Model::record(db, 2, 2, at(day, 11, 10), "NFC", "card")
            .await
            .unwrap();
        attendance::Model::record(db, 2, 2, at(day, 11, 11), "NFC", "card")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unknown_lecturer_redirects_home() {
        let (app, _, _) = make_seeded_app().await;

        let response = app.oneshot(get("/lecturer/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn dashboard_lists_own_lectures_with_counts() {
        let (app, state, today) = make_seeded_app().await;
        tap_ee305(state.db(), today).await;

        let response = app.oneshot(get("/lecturer/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("EE305"));
        assert!(html.contains("Eng202"));
        assert!(!html.contains("CS401"));
        assert!(html.contains("<td>3</td>"));
        assert!(html.contains(r#"href="/lecturer/2/report?lecture_id=2""#));
    }

    #[tokio::test]
    async fn report_lists_attendees_in_tap_order() {
        let (app, state, today) = make_seeded_app().await;
        tap_ee305(state.db(), today).await;

        let response = app.oneshot(get("/lecturer/2/report?lecture_id=2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        let niamh = html.find("Niamh Kelly").unwrap();
        let declan = html.find("Declan Murphy").unwrap();
        assert!(niamh < declan);
        assert!(html.contains("Attendees (3)"));
        assert!(html.contains("Prof. Ciara O&#x27;Sullivan"));
        assert!(html.contains(r#"href="/lecturer/2/report.csv?lecture_id=2""#));
    }

    #[tokio::test]
    async fn report_for_foreign_lecture_redirects_to_dashboard() {
        let (app, _, _) = make_seeded_app().await;

        for uri in [
            "/lecturer/1/report?lecture_id=2",
            "/lecturer/1/report?lecture_id=999",
            "/lecturer/1/report?lecture_id=abc",
            "/lecturer/1/report",
            "/lecturer/1/report.csv?lecture_id=2",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
            assert_eq!(response.headers()[header::LOCATION], "/lecturer/1", "{uri}");
        }
    }

    #[tokio::test]
    async fn csv_export_has_header_rows_and_filename() {
        let (app, state, today) = make_seeded_app().await;
        tap_ee305(state.db(), today).await;

        let response = app
            .oneshot(get("/lecturer/2/report.csv?lecture_id=2"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/csv")
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"lecture-2-attendance.csv\""
        );

        let csv = body_string(response).await;
        let lines: Vec<&str> = csv.lines().collect();
        let day = today.format("%Y-%m-%d");
        assert_eq!(
            lines,
            [
                "Student,Tapped At,Method,Credential".to_string(),
                format!("Niamh Kelly,{day}T11:02:00,NFC,mobile"),
                format!("Declan Murphy,{day}T11:10:00,NFC,card"),
                format!("Declan Murphy,{day}T11:11:00,NFC,card"),
            ]
        );
    }

    #[tokio::test]
    async fn csv_export_without_taps_is_header_only() {
        let (app, _, _) = make_seeded_app().await;

        let response = app
            .oneshot(get("/lecturer/1/report.csv?lecture_id=1"))
            .await
            .unwrap();
        assert_eq!(
            body_string(response).await,
            "Student,Tapped At,Method,Credential\r\n"
        );
    }
}
