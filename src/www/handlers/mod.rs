pub mod api;
pub mod page;
pub mod template;

pub use page::index;

#[cfg(test)]
mod tests {
    use crate::finals::Finals;
    use crate::www::{self, handlers::template};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Finals::builtin().unwrap()))
                    .app_data(web::Data::new(template::new_engine().unwrap()))
                    .configure(www::configure),
            )
            .await
        };
    }

    fn title(figure: &Value) -> &str {
        figure["layout"]["title"]["text"].as_str().unwrap()
    }

    fn outputs_by_target(body: &Value) -> Vec<(String, Value)> {
        body["outputs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| {
                let target = o["target"].as_str().unwrap_or_default();
                (target.to_string(), o["value"].clone())
            })
            .collect()
    }

    #[actix_web::test]
    async fn index_serves_the_dashboard() {
        let app = app!();
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("World Cup Finals Map"));
        assert!(html.contains("year-dropdown"));
        assert!(html.contains("country-dropdown"));
    }

    #[actix_web::test]
    async fn switching_to_year_mode_shows_selector_and_finalists() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({
                "state": {"mode": "all", "selected_year": 1930, "selected_country": null},
                "event": {"input": "mode", "value": "year"},
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["state"]["mode"], "year");
        let outputs = outputs_by_target(&body);
        assert_eq!(outputs.len(), 2);
        let (target, selector) = &outputs[0];
        assert_eq!(target, "year-selector");
        assert_eq!(selector, &json!({"display": "block"}));
        let (target, map) = &outputs[1];
        assert_eq!(target, "map");
        assert_eq!(title(map), "World Cup Finalists - 1930");
        assert_eq!(map["data"][0]["locations"], json!(["URY"]));
        assert_eq!(map["data"][1]["locations"], json!(["ARG"]));
    }

    #[actix_web::test]
    async fn switching_back_hides_selector_whatever_the_year() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({
                "state": {"mode": "year", "selected_year": 2014, "selected_country": "Brazil"},
                "event": {"input": "mode", "value": "all"},
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let outputs = outputs_by_target(&body);
        assert_eq!(outputs[0].1, json!({"display": "none"}));
        assert_eq!(title(&outputs[1].1), "All-Time World Cup Winners");
        assert_eq!(body["state"]["selected_year"], 2014);
        assert_eq!(body["state"]["selected_country"], "Brazil");
    }

    #[actix_web::test]
    async fn unknown_year_renders_placeholder() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({
                "state": {"mode": "year", "selected_year": 1930},
                "event": {"input": "year", "value": 1999},
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let outputs = outputs_by_target(&body);
        assert_eq!(outputs.len(), 1);
        assert_eq!(title(&outputs[0].1), "No data for 1999");
        assert_eq!(outputs[0].1["data"], json!([]));
    }

    #[actix_web::test]
    async fn country_event_returns_win_count_text() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({
                "state": {"mode": "all", "selected_year": 1930, "selected_country": null},
                "event": {"input": "country", "value": "Argentina"},
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let expected = json!("Argentina has won the World Cup 3 times.");
        assert_eq!(
            outputs_by_target(&body),
            vec![("win-count".to_string(), expected)]
        );
    }

    #[actix_web::test]
    async fn malformed_dispatch_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/dispatch")
            .set_json(json!({"event": {"input": "colour", "value": "red"}}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn figure_endpoint() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/figure?mode=year&year=1966")
            .to_request();
        let fig: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(title(&fig), "World Cup Finalists - 1966");
        assert_eq!(fig["data"][0]["name"], "Winner");
        assert_eq!(fig["data"][0]["locations"], json!(["GBR"]));
        assert_eq!(fig["data"][1]["name"], "Runner Up");

        let req = test::TestRequest::get().uri("/api/figure").to_request();
        let fig: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(title(&fig), "All-Time World Cup Winners");
    }

    #[actix_web::test]
    async fn wins_endpoint() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/wins?country=Spain")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["wins"], 1);
        assert_eq!(body["text"], "Spain has won the World Cup 1 time.");

        let req = test::TestRequest::get().uri("/api/wins").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["wins"], 0);
        assert_eq!(body["text"], "");
    }
}
