//! Verification scenarios for the Leads service.
//!
//! Each test is one independent scenario: build requests, execute them
//! through a fresh client, assert on status codes and payloads. Transport
//! failures abort a scenario via `expect`; service-reported validation
//! errors are data and get compared, never unwrapped away.

use pretty_assertions::assert_eq;
use uuid::Uuid;

use leadprobe_domain::{NewLead, StatusCode};
use leadprobe_system_tests::{setup, testdata};

const UNEXPECTED_STATUS: &str = "status code is not as expected";
const UNEXPECTED_MESSAGE: &str = "response error message is not as expected";

fn lead_template(name: &str, pin_code: &str, sub_area_id: i64, address: &str) -> NewLead {
    NewLead {
        name: name.to_owned(),
        pin_code: pin_code.to_owned(),
        sub_area_id,
        address: address.to_owned(),
        mobile_number: "+359896566556".to_owned(),
        email: "user_mail@abv.bg".to_owned(),
    }
}

/// A Lead created from valid input is retrievable, field-for-field equal to
/// what was posted, with the nested SubArea matching by id and pin code.
#[tokio::test]
async fn create_lead_with_valid_input_data() {
    let scenario = setup::scenario().await;
    let api = &scenario.api;

    // Step 1 - pick a SubArea the service itself reports as valid.
    let reply = api.list_sub_areas().await.expect("list SubAreas");
    assert_eq!(StatusCode::OK, reply.status, "{UNEXPECTED_STATUS}");
    let sub_areas = reply.into_success().expect("SubAreas payload");
    let sub_area = sub_areas.first().expect("at least one SubArea").clone();

    // Step 2 - post a Lead referencing it.
    let lead = testdata::lead_referencing(&sub_area);
    let created = api.create_lead(&lead).await.expect("create Lead");
    assert_eq!(StatusCode::OK, created.status, "{UNEXPECTED_STATUS}");
    let id = created.into_success().expect("created id").id;

    // Step 3 - fetch it back by the returned identifier.
    let fetched = api.get_lead(&id).await.expect("get Lead");
    assert_eq!(StatusCode::OK, fetched.status, "{UNEXPECTED_STATUS}");
    let record = fetched.into_success().expect("Lead payload");

    // Step 4 - verify every posted field round-tripped.
    assert_eq!(lead.name, record.name, "names do not match");
    assert_eq!(lead.pin_code, record.pin_code, "pin codes do not match");
    assert_eq!(
        lead.pin_code, record.sub_area.pin_code,
        "nested pin codes do not match"
    );
    assert_eq!(lead.sub_area_id, record.sub_area_id, "sub areas do not match");
    assert_eq!(
        lead.sub_area_id, record.sub_area.id,
        "nested sub areas do not match"
    );
    assert_eq!(lead.address, record.address, "addresses do not match");
    assert_eq!(
        lead.mobile_number, record.mobile_number,
        "mobile numbers do not match"
    );
    assert_eq!(lead.email, record.email, "emails do not match");
    assert_eq!(id, record.id, "ids do not match");
}

/// Posting identical payloads twice succeeds both times and yields two
/// distinct records that are field-equal except for the identifier.
#[tokio::test]
async fn two_leads_with_same_data_can_be_created() {
    let scenario = setup::scenario().await;
    let api = &scenario.api;

    let template = lead_template("User", "567", 4, "user address");

    // Step 1 - create the same Lead twice.
    let mut ids = Vec::with_capacity(2);
    for _ in 0..2 {
        let created = api.create_lead(&template).await.expect("create Lead");
        assert_eq!(StatusCode::OK, created.status, "{UNEXPECTED_STATUS}");
        ids.push(created.into_success().expect("created id").id);
    }
    assert_ne!(ids[0], ids[1], "ids should not be the same");

    // Step 2 - fetch both and compare everything except the id.
    let mut records = Vec::with_capacity(2);
    for id in &ids {
        let fetched = api.get_lead(id).await.expect("get Lead");
        assert_eq!(StatusCode::OK, fetched.status, "{UNEXPECTED_STATUS}");
        records.push(fetched.into_success().expect("Lead payload"));
    }

    let (first, second) = (&records[0], &records[1]);
    assert_eq!(first.name, second.name, "names do not match");
    assert_eq!(first.pin_code, second.pin_code, "pin codes do not match");
    assert_eq!(
        first.sub_area_id, second.sub_area_id,
        "sub areas do not match"
    );
    assert_eq!(
        first.sub_area.pin_code, second.sub_area.pin_code,
        "nested pin codes do not match"
    );
    assert_eq!(
        first.sub_area.id, second.sub_area.id,
        "nested sub areas do not match"
    );
    assert_eq!(first.address, second.address, "addresses do not match");
    assert_eq!(
        first.mobile_number, second.mobile_number,
        "mobile numbers do not match"
    );
    assert_eq!(first.email, second.email, "emails do not match");
}

/// A Lead whose pinCode/subAreaId pair matches no real SubArea is rejected
/// with 400 and the service's exact validation message.
#[tokio::test]
async fn create_lead_with_invalid_sub_area_data() {
    let scenario = setup::scenario().await;
    let api = &scenario.api;

    let cases: [(&str, i64); 2] = [("123", 20), ("20", 1)];

    for (pin_code, sub_area_id) in cases {
        let lead = testdata::lead_referencing(&leadprobe_domain::SubArea {
            id: sub_area_id,
            pin_code: pin_code.to_owned(),
        });
        let reply = api.create_lead(&lead).await.expect("create Lead");
        assert_eq!(
            StatusCode::BAD_REQUEST,
            reply.status,
            "{UNEXPECTED_STATUS} for ({pin_code}, {sub_area_id})"
        );
        assert_eq!(
            Some("SubArea is invalid"),
            reply.error_message(),
            "{UNEXPECTED_MESSAGE} for ({pin_code}, {sub_area_id})"
        );
    }
}

/// An empty name, pinCode or address is rejected with 400 and the service's
/// exact message, including the embedded CRLF.
#[tokio::test]
async fn create_lead_with_empty_input_data() {
    let scenario = setup::scenario().await;
    let api = &scenario.api;

    let cases = [
        (
            lead_template("", "123", 1, "Sofia"),
            "Name cannot be empty\r\nParameter name: Name",
        ),
        (
            lead_template("user", "", 1, "Sofia"),
            "PinCode cannot be empty\r\nParameter name: PinCode",
        ),
        (
            lead_template("user", "123", 1, ""),
            "Address cannot be empty\r\nParameter name: Address",
        ),
    ];

    for (lead, expected_message) in cases {
        let reply = api.create_lead(&lead).await.expect("create Lead");
        assert_eq!(StatusCode::BAD_REQUEST, reply.status, "{UNEXPECTED_STATUS}");
        assert_eq!(
            Some(expected_message),
            reply.error_message(),
            "{UNEXPECTED_MESSAGE}"
        );
    }
}

/// Looking up a syntactically valid but non-existent identifier yields 404.
#[tokio::test]
async fn response_status_code_of_non_existent_lead() {
    let scenario = setup::scenario().await;

    let non_existent_id = Uuid::now_v7().to_string();
    let reply = scenario
        .api
        .get_lead(&non_existent_id)
        .await
        .expect("get Lead");

    assert_eq!(StatusCode::NOT_FOUND, reply.status, "{UNEXPECTED_STATUS}");
    assert!(reply.success().is_none(), "no payload expected on 404");
}

/// Filtering SubAreas by a pin code that matches nothing yields 200 with an
/// empty collection, not an error.
#[tokio::test]
async fn no_results_are_shown_with_unused_pin_code() {
    let scenario = setup::scenario().await;

    let unused_pin_code = testdata::random_string(5);
    let reply = scenario
        .api
        .filter_sub_areas(&unused_pin_code)
        .await
        .expect("filter SubAreas");

    assert_eq!(StatusCode::OK, reply.status, "{UNEXPECTED_STATUS}");
    let sub_areas = reply.into_success().expect("SubAreas payload");
    assert!(sub_areas.is_empty(), "SubArea collection is not empty");
}
