mod common;

use reqwest::StatusCode;
use serde_json::json;

fn team_of(project: &serde_json::Value) -> Vec<String> {
    let mut team: Vec<String> = project["team"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    team.sort();
    team
}

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/api/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");

    common::cleanup(app).await;
}

// ── Auth ────────────────────────────────────────────────────────

#[tokio::test]
async fn signup_and_login() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .signup("admin@test.com", "admin123", "Admin User", "admin")
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "admin@test.com");
    assert!(body["user"].get("passwordHash").is_none());

    let (body, status) = app.login("admin@test.com", "admin123").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());

    common::cleanup(app).await;
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let app = common::spawn_app().await;
    app.bootstrap().await;

    let (body, status) = app
        .signup("admin@test.com", "other123", "Other", "team_member")
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn signup_rejects_unknown_role() {
    let app = common::spawn_app().await;

    let (_, status) = app
        .signup("x@test.com", "password1", "X", "superuser")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    common::cleanup(app).await;
}

#[tokio::test]
async fn login_invalid_credentials() {
    let app = common::spawn_app().await;
    app.bootstrap().await;

    let (_, status) = app.login("admin@test.com", "wrongpassword").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, status) = app.login("nobody@test.com", "admin123").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    common::cleanup(app).await;
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let (body, status) = app.get_auth("/api/auth/me", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Admin User");

    common::cleanup(app).await;
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .get(app.url("/api/projects"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let (_, status) = app.get_auth("/api/analytics", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    common::cleanup(app).await;
}

// ── Users ───────────────────────────────────────────────────────

#[tokio::test]
async fn profile_update_and_password_change() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let (body, status) = app
        .put_auth("/api/users/profile", &token, &json!({ "name": "Renamed" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Renamed");

    // Wrong current password is rejected
    let (_, status) = app
        .put_auth(
            "/api/users/password",
            &token,
            &json!({ "currentPassword": "nope", "newPassword": "fresh123" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, status) = app
        .put_auth(
            "/api/users/password",
            &token,
            &json!({ "currentPassword": "admin123", "newPassword": "fresh123" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, status) = app.login("admin@test.com", "fresh123").await;
    assert_eq!(status, StatusCode::OK);

    common::cleanup(app).await;
}

// ── Projects & team synchronization ─────────────────────────────

fn project_body(name: &str, team: Option<serde_json::Value>) -> serde_json::Value {
    let mut body = json!({
        "name": name,
        "manager": "Admin User",
        "startDate": "2025-01-01",
        "endDate": "2025-06-30",
        "budget": 50000,
    });
    if let Some(team) = team {
        body["team"] = team;
    }
    body
}

fn update_body(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "description": "",
        "status": "in_progress",
        "manager": "Admin User",
        "startDate": "2025-01-01",
        "endDate": "2025-06-30",
        "budget": 50000,
        "spent": 0,
        "progress": 10,
    })
}

#[tokio::test]
async fn project_create_resolves_team_names() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;
    app.create_member("Alice").await;

    // Duplicates collapse, unknown names are silently dropped
    let project = app
        .create_project(
            &token,
            &project_body("Alpha", Some(json!(["Alice", "Alice", "Bob"]))),
        )
        .await;
    assert_eq!(team_of(&project), vec!["Alice"]);

    common::cleanup(app).await;
}

#[tokio::test]
async fn project_team_replace_omit_and_clear() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;
    app.create_member("Alice").await;
    app.create_member("Bob").await;

    let project = app
        .create_project(&token, &project_body("Alpha", Some(json!(["Alice"]))))
        .await;
    let id = project["id"].as_i64().unwrap();

    // Supplying a team replaces membership wholesale
    let mut body = update_body("Alpha");
    body["team"] = json!(["Bob", "Bob", "Alice"]);
    let (resp, status) = app.put_auth(&format!("/api/projects/{id}"), &token, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team_of(&resp["project"]), vec!["Alice", "Bob"]);

    // Omitting the team field leaves membership untouched
    let (resp, status) = app
        .put_auth(&format!("/api/projects/{id}"), &token, &update_body("Alpha"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team_of(&resp["project"]), vec!["Alice", "Bob"]);

    // An empty list clears membership entirely
    let mut body = update_body("Alpha");
    body["team"] = json!([]);
    let (resp, status) = app.put_auth(&format!("/api/projects/{id}"), &token, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(resp["project"]["team"].as_array().unwrap().is_empty());

    common::cleanup(app).await;
}

#[tokio::test]
async fn project_team_readd_is_idempotent() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;
    app.create_member("Alice").await;

    let project = app
        .create_project(&token, &project_body("Alpha", Some(json!(["Alice"]))))
        .await;
    let id = project["id"].as_i64().unwrap();

    // Re-supplying an already-present member yields one row, no error
    let mut body = update_body("Alpha");
    body["team"] = json!(["Alice", "Alice"]);
    let (resp, status) = app.put_auth(&format!("/api/projects/{id}"), &token, &body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(team_of(&resp["project"]), vec!["Alice"]);

    common::cleanup(app).await;
}

#[tokio::test]
async fn project_crud_and_cascade() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let project = app.create_project(&token, &project_body("Alpha", None)).await;
    let id = project["id"].as_i64().unwrap();

    let (body, status) = app.get_auth(&format!("/api/projects/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["name"], "Alpha");
    assert_eq!(body["project"]["status"], "planned");

    // A task under the project
    let (_, status) = app
        .post_auth(
            "/api/tasks",
            &token,
            &json!({
                "projectId": id,
                "title": "Design",
                "assignee": "Admin User",
                "dueDate": "2025-02-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Delete cascades to children
    let (_, status) = app.delete_auth(&format!("/api/projects/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);

    let (body, status) = app.get_auth("/api/tasks", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["tasks"].as_array().unwrap().is_empty());

    let (_, status) = app.get_auth(&format!("/api/projects/{id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

// ── Tasks & timesheets ──────────────────────────────────────────

#[tokio::test]
async fn timesheet_create_increments_task_hours() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let project = app.create_project(&token, &project_body("Alpha", None)).await;
    let project_id = project["id"].as_i64().unwrap();

    let (body, _) = app
        .post_auth(
            "/api/tasks",
            &token,
            &json!({
                "projectId": project_id,
                "title": "Build",
                "assignee": "Admin User",
                "dueDate": "2025-03-01",
                "estimatedHours": 40,
            }),
        )
        .await;
    let task_id = body["task"]["id"].as_i64().unwrap();

    let (body, status) = app
        .post_auth(
            "/api/timesheets",
            &token,
            &json!({
                "projectId": project_id,
                "taskId": task_id,
                "employee": "Admin User",
                "date": "2025-02-10",
                "hours": 6.5,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["timesheet"]["billable"], true);
    let timesheet_id = body["timesheet"]["id"].as_i64().unwrap();

    let (body, _) = app.get_auth(&format!("/api/tasks/{task_id}"), &token).await;
    assert_eq!(body["task"]["hoursLogged"].as_f64().unwrap(), 6.5);

    // The running total is not adjusted when the timesheet goes away
    let (_, status) = app
        .delete_auth(&format!("/api/timesheets/{timesheet_id}"), &token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (body, _) = app.get_auth(&format!("/api/tasks/{task_id}"), &token).await;
    assert_eq!(body["task"]["hoursLogged"].as_f64().unwrap(), 6.5);

    common::cleanup(app).await;
}

#[tokio::test]
async fn timesheet_list_filters_by_project_and_task() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let p1 = app.create_project(&token, &project_body("Alpha", None)).await;
    let p2 = app.create_project(&token, &project_body("Beta", None)).await;
    let p1_id = p1["id"].as_i64().unwrap();
    let p2_id = p2["id"].as_i64().unwrap();

    for (pid, hours) in [(p1_id, 2), (p1_id, 3), (p2_id, 5)] {
        let (_, status) = app
            .post_auth(
                "/api/timesheets",
                &token,
                &json!({
                    "projectId": pid,
                    "employee": "Admin User",
                    "date": "2025-02-10",
                    "hours": hours,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (body, _) = app
        .get_auth(&format!("/api/timesheets?projectId={p1_id}"), &token)
        .await;
    assert_eq!(body["timesheets"].as_array().unwrap().len(), 2);

    let (body, _) = app.get_auth("/api/timesheets", &token).await;
    assert_eq!(body["timesheets"].as_array().unwrap().len(), 3);

    common::cleanup(app).await;
}

// ── Financial documents ─────────────────────────────────────────

#[tokio::test]
async fn invoice_number_conflict() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let project = app.create_project(&token, &project_body("Alpha", None)).await;
    let project_id = project["id"].as_i64().unwrap();

    let invoice = json!({
        "projectId": project_id,
        "number": "INV-001",
        "customer": "Acme",
        "amount": 1200.50,
        "date": "2025-02-01",
        "dueDate": "2025-03-01",
    });

    let (_, status) = app.post_auth("/api/invoices", &token, &invoice).await;
    assert_eq!(status, StatusCode::CREATED);

    let (body, status) = app.post_auth("/api/invoices", &token, &invoice).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("number"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn expense_defaults_and_update() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let project = app.create_project(&token, &project_body("Alpha", None)).await;
    let project_id = project["id"].as_i64().unwrap();

    let (body, status) = app
        .post_auth(
            "/api/expenses",
            &token,
            &json!({
                "projectId": project_id,
                "employee": "Admin User",
                "amount": 99.99,
                "date": "2025-02-01",
                "category": "travel",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["expense"]["billable"], false);
    assert_eq!(body["expense"]["status"], "pending");
    let id = body["expense"]["id"].as_i64().unwrap();

    let (body, status) = app
        .put_auth(
            &format!("/api/expenses/{id}"),
            &token,
            &json!({
                "employee": "Admin User",
                "amount": 120,
                "date": "2025-02-01",
                "category": "travel",
                "description": "flight",
                "billable": true,
                "status": "approved",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expense"]["status"], "approved");

    common::cleanup(app).await;
}

#[tokio::test]
async fn update_missing_entities_return_not_found() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let (_, status) = app
        .put_auth(
            "/api/sales-orders/9999",
            &token,
            &json!({
                "number": "SO-1",
                "customer": "Acme",
                "amount": 10,
                "date": "2025-02-01",
                "status": "draft",
                "description": "",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, status) = app.delete_auth("/api/vendor-bills/9999", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    common::cleanup(app).await;
}

// ── Analytics ───────────────────────────────────────────────────

#[tokio::test]
async fn analytics_empty_population() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let (body, status) = app.get_auth("/api/analytics", &token).await;
    assert_eq!(status, StatusCode::OK);

    let analytics = &body["analytics"];
    assert_eq!(analytics["totalProjects"], 0);
    assert_eq!(analytics["totalTasks"], 0);
    assert_eq!(analytics["totalHours"].as_f64().unwrap(), 0.0);
    assert_eq!(analytics["profit"].as_f64().unwrap(), 0.0);
    assert!(analytics["projectProgress"].as_array().unwrap().is_empty());
    assert!(analytics["resourceUtilization"].as_array().unwrap().is_empty());

    common::cleanup(app).await;
}

#[tokio::test]
async fn analytics_sums_and_utilization() {
    let app = common::spawn_app().await;
    let token = app.bootstrap().await;

    let project = app.create_project(&token, &project_body("Alpha", None)).await;
    let project_id = project["id"].as_i64().unwrap();

    // Mark it active with some progress
    let mut body = update_body("Alpha");
    body["progress"] = json!(40);
    let (_, status) = app
        .put_auth(&format!("/api/projects/{project_id}"), &token, &body)
        .await;
    assert_eq!(status, StatusCode::OK);

    // One done task, one open
    for (title, task_status) in [("Design", "done"), ("Build", "in_progress")] {
        let (_, status) = app
            .post_auth(
                "/api/tasks",
                &token,
                &json!({
                    "projectId": project_id,
                    "title": title,
                    "assignee": "Admin User",
                    "status": task_status,
                    "dueDate": "2025-03-01",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Alice over capacity (200h billable), Bob under (40h, split billable)
    for (employee, hours, billable) in
        [("Alice", 200, true), ("Bob", 25, true), ("Bob", 15, false)]
    {
        let (_, status) = app
            .post_auth(
                "/api/timesheets",
                &token,
                &json!({
                    "projectId": project_id,
                    "employee": employee,
                    "date": "2025-02-10",
                    "hours": hours,
                    "billable": billable,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Revenue 1000, cost 600 + 700 -> profit is negative
    let (_, status) = app
        .post_auth(
            "/api/invoices",
            &token,
            &json!({
                "projectId": project_id,
                "number": "INV-001",
                "customer": "Acme",
                "amount": 1000,
                "date": "2025-02-01",
                "dueDate": "2025-03-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, status) = app
        .post_auth(
            "/api/vendor-bills",
            &token,
            &json!({
                "projectId": project_id,
                "number": "BILL-001",
                "vendor": "Supplies Inc",
                "amount": 600,
                "date": "2025-02-01",
                "dueDate": "2025-03-01",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, status) = app
        .post_auth(
            "/api/expenses",
            &token,
            &json!({
                "projectId": project_id,
                "employee": "Admin User",
                "amount": 700,
                "date": "2025-02-01",
                "category": "hardware",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (body, status) = app.get_auth("/api/analytics", &token).await;
    assert_eq!(status, StatusCode::OK);
    let analytics = &body["analytics"];

    assert_eq!(analytics["totalProjects"], 1);
    assert_eq!(analytics["activeProjects"], 1);
    assert_eq!(analytics["totalTasks"], 2);
    assert_eq!(analytics["completedTasks"], 1);

    // Billable split adds up to the unfiltered total
    let total = analytics["totalHours"].as_f64().unwrap();
    let billable = analytics["billableHours"].as_f64().unwrap();
    let non_billable = analytics["nonBillableHours"].as_f64().unwrap();
    assert_eq!(total, 240.0);
    assert_eq!(billable, 225.0);
    assert_eq!(non_billable, 15.0);
    assert_eq!(billable + non_billable, total);

    assert_eq!(analytics["totalRevenue"].as_f64().unwrap(), 1000.0);
    assert_eq!(analytics["totalCost"].as_f64().unwrap(), 1300.0);
    assert_eq!(analytics["profit"].as_f64().unwrap(), -300.0);

    let progress = analytics["projectProgress"].as_array().unwrap();
    assert_eq!(progress.len(), 1);
    assert_eq!(progress[0]["name"], "Alpha");
    assert_eq!(progress[0]["progress"], 40);

    // 200h -> clamped to 100, 40h -> 25
    let utilization = analytics["resourceUtilization"].as_array().unwrap();
    assert_eq!(utilization.len(), 2);
    assert_eq!(utilization[0]["name"], "Alice");
    assert_eq!(utilization[0]["utilization"], 100);
    assert_eq!(utilization[1]["name"], "Bob");
    assert_eq!(utilization[1]["utilization"], 25);

    common::cleanup(app).await;
}
