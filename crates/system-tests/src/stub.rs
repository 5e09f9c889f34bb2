//! In-process stand-in for the Leads service.
//!
//! Implements the wire contract the scenarios exercise: SubArea listing and
//! filtering, Lead creation with the service's validation rules, and Lead
//! lookup by id. Each instance listens on its own ephemeral port and keeps
//! its own created-Lead state, so parallel scenarios never interfere.
//!
//! Seeded SubAreas: ids 1-5 with pin codes `123`, `234`, `345`, `567`,
//! `789`. The pair (pinCode `567`, id 4) is valid; (`123`, 20) and
//! (`20`, 1) are not.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use leadprobe_domain::{LeadRecord, NewLead, SubArea};

fn seed_sub_areas() -> Vec<SubArea> {
    [(1, "123"), (2, "234"), (3, "345"), (4, "567"), (5, "789")]
        .into_iter()
        .map(|(id, pin_code)| SubArea {
            id,
            pin_code: pin_code.to_owned(),
        })
        .collect()
}

/// Validation message for an empty required field, byte-for-byte as the
/// real service emits it (CRLF included).
fn empty_field_message(field: &str) -> String {
    format!("{field} cannot be empty\r\nParameter name: {field}")
}

fn error_body(message: &str) -> serde_json::Value {
    json!({ "message": message })
}

type LeadStore = Arc<Mutex<HashMap<String, NewLead>>>;

/// A wiremock-backed Leads service stub.
///
/// Kept alive for the duration of a scenario; dropping it stops the server.
pub struct StubLeadsService {
    server: MockServer,
}

impl StubLeadsService {
    /// Starts a stub on an ephemeral local port.
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let leads: LeadStore = Arc::new(Mutex::new(HashMap::new()));

        Mock::given(method("GET"))
            .and(path("/SubAreas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed_sub_areas()))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/SubAreas/Filter/PinCode/[^/]+$"))
            .respond_with(FilterSubAreas)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/Leads"))
            .respond_with(CreateLead {
                leads: Arc::clone(&leads),
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/Leads/[^/]+$"))
            .respond_with(GetLead { leads })
            .mount(&server)
            .await;

        Self { server }
    }

    /// Socket address the stub listens on.
    #[must_use]
    pub fn address(&self) -> SocketAddr {
        *self.server.address()
    }
}

fn last_path_segment(request: &Request) -> String {
    request
        .url
        .path_segments()
        .and_then(Iterator::last)
        .unwrap_or_default()
        .to_owned()
}

struct FilterSubAreas;

impl Respond for FilterSubAreas {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let pin_code = last_path_segment(request);
        let matches: Vec<SubArea> = seed_sub_areas()
            .into_iter()
            .filter(|s| s.pin_code == pin_code)
            .collect();
        ResponseTemplate::new(200).set_body_json(matches)
    }
}

struct CreateLead {
    leads: LeadStore,
}

impl Respond for CreateLead {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(lead) = serde_json::from_slice::<NewLead>(&request.body) else {
            return ResponseTemplate::new(400)
                .set_body_json(error_body("Lead payload is malformed"));
        };

        for (value, field) in [
            (&lead.name, "Name"),
            (&lead.pin_code, "PinCode"),
            (&lead.address, "Address"),
        ] {
            if value.is_empty() {
                return ResponseTemplate::new(400)
                    .set_body_json(error_body(&empty_field_message(field)));
            }
        }

        let reference_valid = seed_sub_areas()
            .iter()
            .any(|s| s.id == lead.sub_area_id && s.pin_code == lead.pin_code);
        if !reference_valid {
            return ResponseTemplate::new(400).set_body_json(error_body("SubArea is invalid"));
        }

        let id = Uuid::now_v7().to_string();
        self.leads
            .lock()
            .expect("stub lead store lock")
            .insert(id.clone(), lead);
        ResponseTemplate::new(200).set_body_json(json!({ "id": id }))
    }
}

struct GetLead {
    leads: LeadStore,
}

impl Respond for GetLead {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = last_path_segment(request);
        let Some(lead) = self.leads.lock().expect("stub lead store lock").get(&id).cloned()
        else {
            return ResponseTemplate::new(404);
        };
        let Some(sub_area) = seed_sub_areas().into_iter().find(|s| s.id == lead.sub_area_id)
        else {
            return ResponseTemplate::new(404);
        };
        let record = LeadRecord {
            id,
            name: lead.name,
            pin_code: lead.pin_code,
            sub_area_id: lead.sub_area_id,
            address: lead.address,
            mobile_number: lead.mobile_number,
            email: lead.email,
            sub_area,
        };
        ResponseTemplate::new(200).set_body_json(record)
    }
}
