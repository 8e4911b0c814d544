use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use nestrank_core::{rank, Criteria, Error, Listing};
use nestrank_source::ListingSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HousesQuery {
    check_stores: Option<String>,
    check_transit: Option<String>,
    check_parks: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HousesResponse {
    housing_data: Vec<Listing>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        source: Arc<dyn ListingSource>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(source.clone()))
                .route("/", web::get().to(hello))
                .route("/houses", web::get().to(houses))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn hello() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().body("Hello World!"))
}

async fn houses(
    source: web::Data<Arc<dyn ListingSource>>,
    query: web::Query<HousesQuery>,
) -> ActixResult<HttpResponse> {
    let criteria = Criteria::from_flags(
        query.check_stores.as_deref(),
        query.check_transit.as_deref(),
        query.check_parks.as_deref(),
    );

    let listings = match source.fetch() {
        Ok(listings) => listings,
        Err(e) => {
            error!("Listing fetch failed: {}", e);
            return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    match rank(listings, &criteria) {
        Ok(ordered) => Ok(HttpResponse::Ok().json(HousesResponse {
            housing_data: ordered,
        })),
        Err(e @ Error::InvalidListingData { .. }) => {
            error!("Ranking rejected listing data: {}", e);
            Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use nestrank_source::InMemorySource;

    fn listing(address: &str, grocery: f64, transit: f64, park: f64) -> Listing {
        Listing {
            address: address.to_string(),
            city: "San Jose".to_string(),
            state: "CA".to_string(),
            zip_code: "95112".to_string(),
            latitude: 37.33,
            longitude: -121.88,
            number_of_rooms: 2,
            square_feet: 900.0,
            price: 2400.0,
            distance_from_public_transportation: transit,
            distance_from_whole_foods: grocery,
            distance_from_parks: park,
        }
    }

    fn test_app(
        listings: Vec<Listing>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let source: Arc<dyn ListingSource> = Arc::new(InMemorySource::new(listings));
        App::new()
            .app_data(web::Data::new(source))
            .route("/", web::get().to(hello))
            .route("/houses", web::get().to(houses))
    }

    #[actix_web::test]
    async fn test_hello() {
        let app = test::init_service(test_app(vec![])).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_houses_ranked_by_grocery() {
        let app = test::init_service(test_app(vec![
            listing("Far", 0.5, 0.01, 3.0),
            listing("Near", 0.02, 5.0, 1.0),
        ]))
        .await;

        let req = test::TestRequest::get()
            .uri("/houses?checkStores=true")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let houses = body["housingData"].as_array().unwrap();
        assert_eq!(houses.len(), 2);
        assert_eq!(houses[0]["address"], "Near");
        assert_eq!(houses[1]["address"], "Far");
    }

    #[actix_web::test]
    async fn test_houses_without_flags_keeps_fetch_order() {
        let app = test::init_service(test_app(vec![
            listing("First", 0.5, 0.01, 3.0),
            listing("Second", 0.02, 5.0, 1.0),
        ]))
        .await;

        let req = test::TestRequest::get().uri("/houses").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let houses = body["housingData"].as_array().unwrap();
        assert_eq!(houses[0]["address"], "First");
        assert_eq!(houses[1]["address"], "Second");
    }

    #[actix_web::test]
    async fn test_houses_rejects_invalid_distance() {
        let app = test::init_service(test_app(vec![listing("Bad", f64::NAN, 1.0, 1.0)])).await;

        let req = test::TestRequest::get()
            .uri("/houses?checkStores=true")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
