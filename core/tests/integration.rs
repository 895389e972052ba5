//! Lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP through `UreqTransport`. Validates that request building, the ureq
//! adapter and response mapping agree with an actual server.

use activiti_client::{
    ActivitiClient, ActivitiError, FormApi, FormSubmit, GroupApi, GroupCreate, GroupQuery, GroupUpdate, TaskAction,
    TaskApi, TaskCreate, TaskQuery, TransportConfig, UreqTransport, UserApi, UserCreate, UserQuery, UserUpdate,
};

/// Start the mock server on a random port and return its base URL.
fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client() -> ActivitiClient<UreqTransport> {
    let config = TransportConfig::new(&start_mock_server()).with_credentials("kermit", "kermit");
    ActivitiClient::from_config(&config)
}

#[test]
fn user_lifecycle() {
    let client = client();
    let users = client.users();

    // Step 1: list, should be empty.
    let list = users.get_users_list(&UserQuery::default()).unwrap();
    assert!(list.is_empty(), "expected empty list");
    assert_eq!(list.total, Some(0));

    // Step 2: create.
    let created = users
        .create_user(&UserCreate {
            first_name: Some("Fred".to_string()),
            last_name: Some("McDonald".to_string()),
            password: Some("secret".to_string()),
            ..UserCreate::new("testuser")
        })
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("testuser"));
    assert_eq!(created.first_name.as_deref(), Some("Fred"));

    // Step 3: creating it again is a conflict carrying the server body.
    match users.create_user(&UserCreate::new("testuser")) {
        Err(ActivitiError::Api { status, body }) => {
            assert_eq!(status, 409);
            assert!(body.contains("already exists"), "body was {body}");
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    // Step 4: filtered list.
    let query = UserQuery {
        first_name: Some("Fred".to_string()),
        ..Default::default()
    };
    let list = users.get_users_list(&query).unwrap();
    assert_eq!(list.total, Some(1));
    assert_eq!(list.data[0].id.as_deref(), Some("testuser"));

    // Step 5: partial update keeps other fields.
    let updated = users
        .update_user(
            "testuser",
            &UserUpdate {
                email: Some("no-reply@activiti.org".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("no-reply@activiti.org"));
    assert_eq!(updated.last_name.as_deref(), Some("McDonald"));

    // Step 6: picture bytes survive the round trip untouched.
    let picture = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
    users.set_user_picture("testuser", &picture).unwrap();
    assert_eq!(users.get_user_picture("testuser").unwrap(), picture);

    // Step 7: user info.
    let info = users.create_user_info("testuser", "key1", "Value 1").unwrap();
    assert_eq!(info.value.as_deref(), Some("Value 1"));
    let infos = users.get_user_info_list("testuser").unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].key.as_deref(), Some("key1"));
    let info = users.update_user_info("testuser", "key1", "Updated").unwrap();
    assert_eq!(info.value.as_deref(), Some("Updated"));
    assert_eq!(
        users.get_user_info("testuser", "key1").unwrap().value.as_deref(),
        Some("Updated")
    );
    users.delete_user_info("testuser", "key1").unwrap();
    assert!(users.get_user_info("testuser", "key1").unwrap_err().is_not_found());

    // Step 8: delete, then the user is gone.
    users.delete_user("testuser").unwrap();
    let err = users.get_user("testuser").unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        ActivitiError::Api { body, .. } => assert!(body.contains("Could not find a user")),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[test]
fn group_membership_lifecycle() {
    let client = client();
    client.users().create_user(&UserCreate::new("kermit")).unwrap();
    let groups = client.groups();

    let group = groups
        .create_group(&GroupCreate {
            name: Some("Sales".to_string()),
            group_type: Some("assignment".to_string()),
            ..GroupCreate::new("sales")
        })
        .unwrap();
    assert_eq!(group.group_type.as_deref(), Some("assignment"));

    let renamed = groups
        .update_group(
            "sales",
            &GroupUpdate {
                name: Some("Sales EMEA".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("Sales EMEA"));
    assert_eq!(renamed.group_type.as_deref(), Some("assignment"));

    let member = groups.add_group_member("sales", "kermit").unwrap();
    assert_eq!(member.group_id.as_deref(), Some("sales"));
    assert_eq!(member.user_id.as_deref(), Some("kermit"));

    let members = client
        .users()
        .get_users_list(&UserQuery {
            member_of_group: Some("sales".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(members.len(), 1);

    let of_kermit = groups
        .get_groups_list(&GroupQuery {
            member: Some("kermit".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(of_kermit.data[0].id.as_deref(), Some("sales"));

    groups.delete_group_member("sales", "kermit").unwrap();
    assert_eq!(
        groups.delete_group_member("sales", "kermit").unwrap_err().status(),
        Some(404)
    );

    groups.delete_group("sales").unwrap();
    assert!(groups.get_group("sales").unwrap_err().is_not_found());
}

#[test]
fn task_and_form_lifecycle() {
    let client = client();
    let tasks = client.tasks();

    let task = tasks
        .create_task(&TaskCreate {
            name: Some("Review".to_string()),
            priority: Some(80),
            ..Default::default()
        })
        .unwrap();
    let id = task.id.clone().unwrap();
    assert_eq!(task.priority, Some(80));

    tasks.task_action(&id, &TaskAction::claim(Some("kermit"))).unwrap();
    let mine = tasks
        .get_tasks_list(&TaskQuery {
            assignee: Some("kermit".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(mine.total, Some(1));
    assert_eq!(mine.data[0].assignee.as_deref(), Some("kermit"));

    let err = tasks.task_action(&id, &TaskAction::claim(Some("gonzo"))).unwrap_err();
    assert_eq!(err.status(), Some(409));

    let form = client.forms().get_form_data_by_task_id(&id).unwrap();
    assert_eq!(form.task_id.as_deref(), Some(id.as_str()));
    assert_eq!(form.form_properties[0].id.as_deref(), Some("comment"));

    let submitted = client
        .forms()
        .submit_task_form_data(&FormSubmit::for_task(&id).with_property("comment", "looks good"))
        .unwrap();
    assert!(submitted.is_none());
    assert!(tasks.get_task(&id).unwrap_err().is_not_found());
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ActivitiClient::from_config(&TransportConfig::new(&format!("http://127.0.0.1:{port}")));

    let err = client.users().get_user("kermit").unwrap_err();
    assert!(matches!(err, ActivitiError::Transport(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}
