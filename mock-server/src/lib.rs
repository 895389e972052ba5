//! In-memory stand-in for the parts of the Activiti REST API the client
//! exercises end to end: users (with pictures and info), groups and
//! membership, tasks and task form data.
//!
//! Lists answer in the `{data,total,start,sort,order,size}` envelope and
//! failures answer with Activiti's `{message,exception}` error body.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Prefix used for the `url` fields of returned resources.
pub const REST_ROOT: &str = "http://localhost:8182";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataList<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub start: usize,
    pub sort: String,
    pub order: String,
    pub size: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub url: String,
    pub picture_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserInfo {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub url: String,
}

#[derive(Deserialize)]
pub struct InfoPayload {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub url: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

#[derive(Deserialize)]
pub struct GroupPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: String,
    pub group_id: String,
    pub url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub assignee: Option<String>,
    pub delegation_state: Option<String>,
    pub priority: i64,
    pub suspended: bool,
    pub category: Option<String>,
    pub form_key: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub assignee: Option<String>,
    pub delegation_state: Option<String>,
    pub priority: Option<i64>,
    pub category: Option<String>,
    pub form_key: Option<String>,
}

#[derive(Deserialize)]
pub struct TaskActionPayload {
    pub action: String,
    pub assignee: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub value: Option<String>,
    pub readable: bool,
    pub writable: bool,
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub form_key: Option<String>,
    pub task_id: String,
    pub task_url: String,
    pub form_properties: Vec<FormProperty>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmitPayload {
    pub task_id: Option<String>,
    pub process_definition_id: Option<String>,
    #[serde(default)]
    pub properties: Vec<SubmittedProperty>,
}

#[derive(Deserialize)]
pub struct SubmittedProperty {
    pub id: String,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub member_of_group: Option<String>,
    pub member: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub assignee: Option<String>,
    pub unassigned: Option<bool>,
    pub start: Option<usize>,
    pub size: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormParams {
    pub task_id: Option<String>,
    pub process_definition_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure rendered as Activiti's `{message, exception}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    exception: String,
}

impl ApiError {
    fn not_found(exception: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            exception,
        }
    }

    fn conflict(exception: String) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            exception,
        }
    }

    fn bad_request(exception: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            exception: exception.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, exception = %self.exception, "request rejected");
        let message = self.status.canonical_reason().unwrap_or("Error");
        let body = serde_json::json!({"message": message, "exception": self.exception});
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct Store {
    users: BTreeMap<String, User>,
    pictures: HashMap<String, Bytes>,
    user_info: BTreeMap<String, BTreeMap<String, String>>,
    groups: BTreeMap<String, Group>,
    memberships: BTreeSet<(String, String)>,
    tasks: BTreeMap<String, Task>,
}

pub type Db = Arc<RwLock<Store>>;

impl Store {
    fn user(&self, id: &str) -> Result<&User, ApiError> {
        self.users
            .get(id)
            .ok_or_else(|| ApiError::not_found(format!("Could not find a user with id '{id}'.")))
    }

    fn group(&self, id: &str) -> Result<&Group, ApiError> {
        self.groups
            .get(id)
            .ok_or_else(|| ApiError::not_found(format!("Could not find a group with id '{id}'.")))
    }

    fn task(&self, id: &str) -> Result<&Task, ApiError> {
        self.tasks
            .get(id)
            .ok_or_else(|| ApiError::not_found(format!("Could not find a task with id '{id}'.")))
    }

    fn task_mut(&mut self, id: &str) -> Result<&mut Task, ApiError> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| ApiError::not_found(format!("Could not find a task with id '{id}'.")))
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/identity/users", get(list_users).post(create_user))
        .route("/identity/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/identity/users/{id}/picture", get(get_picture).put(set_picture))
        .route("/identity/users/{id}/info", get(list_user_info).post(create_user_info))
        .route(
            "/identity/users/{id}/info/{key}",
            get(get_user_info).put(update_user_info).delete(delete_user_info),
        )
        .route("/identity/groups", get(list_groups).post(create_group))
        .route("/identity/groups/{id}", get(get_group).put(update_group).delete(delete_group))
        .route("/identity/groups/{id}/members", post(add_member))
        .route("/identity/groups/{id}/members/{user_id}", delete(remove_member))
        .route("/runtime/tasks", get(list_tasks).post(create_task))
        .route(
            "/runtime/tasks/{id}",
            get(get_task).put(update_task).post(task_action).delete(delete_task),
        )
        .route("/form/form-data", get(get_form_data).post(submit_form_data))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock activiti listening");
    }
    axum::serve(listener, app()).await
}

fn page<T>(items: Vec<T>, params: &ListParams) -> DataList<T> {
    let total = items.len();
    let start = params.start.unwrap_or(0);
    let size = params.size.unwrap_or(10);
    let data: Vec<T> = items.into_iter().skip(start).take(size).collect();
    DataList {
        size: data.len(),
        data,
        total,
        start,
        sort: "id".to_string(),
        order: "asc".to_string(),
    }
}

fn set_if_some(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

async fn list_users(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<DataList<User>> {
    let store = db.read().await;
    let users = store
        .users
        .values()
        .filter(|u| params.first_name.is_none() || u.first_name == params.first_name)
        .filter(|u| params.last_name.is_none() || u.last_name == params.last_name)
        .filter(|u| match &params.member_of_group {
            Some(group) => store.memberships.contains(&(group.clone(), u.id.clone())),
            None => true,
        })
        .cloned()
        .collect();
    Json(page(users, &params))
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let id = input
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Id cannot be null."))?;
    let mut store = db.write().await;
    if store.users.contains_key(&id) {
        return Err(ApiError::conflict(format!("A user with id '{id}' already exists.")));
    }
    let user = User {
        url: format!("{REST_ROOT}/identity/users/{id}"),
        id: id.clone(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        picture_url: None,
    };
    store.users.insert(id, user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<User>, ApiError> {
    let store = db.read().await;
    store.user(&id).cloned().map(Json)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let mut store = db.write().await;
    let user = store
        .users
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found(format!("Could not find a user with id '{id}'.")))?;
    set_if_some(&mut user.first_name, input.first_name);
    set_if_some(&mut user.last_name, input.last_name);
    set_if_some(&mut user.email, input.email);
    Ok(Json(user.clone()))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.user(&id)?;
    store.users.remove(&id);
    store.pictures.remove(&id);
    store.user_info.remove(&id);
    store.memberships.retain(|(_, user)| user != &id);
    Ok(StatusCode::NO_CONTENT)
}

async fn get_picture(State(db): State<Db>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let store = db.read().await;
    store.user(&id)?;
    let picture = store
        .pictures
        .get(&id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("The user with id '{id}' does not have a picture.")))?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], picture).into_response())
}

async fn set_picture(State(db): State<Db>, Path(id): Path<String>, body: Bytes) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.user(&id)?;
    store.pictures.insert(id.clone(), body);
    if let Some(user) = store.users.get_mut(&id) {
        user.picture_url = Some(format!("{REST_ROOT}/identity/users/{id}/picture"));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn info_url(user_id: &str, key: &str) -> String {
    format!("{REST_ROOT}/identity/users/{user_id}/info/{key}")
}

async fn list_user_info(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let store = db.read().await;
    store.user(&id)?;
    let infos = store
        .user_info
        .get(&id)
        .into_iter()
        .flat_map(|entries| entries.keys())
        .map(|key| UserInfo {
            key: key.clone(),
            value: None,
            url: info_url(&id, key),
        })
        .collect();
    Ok(Json(infos))
}

async fn create_user_info(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<InfoPayload>,
) -> Result<(StatusCode, Json<UserInfo>), ApiError> {
    let key = input
        .key
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ApiError::bad_request("The key cannot be null."))?;
    let value = input
        .value
        .ok_or_else(|| ApiError::bad_request("The value cannot be null."))?;
    let mut store = db.write().await;
    store.user(&id)?;
    let entries = store.user_info.entry(id.clone()).or_default();
    if entries.contains_key(&key) {
        return Err(ApiError::conflict(format!(
            "User info with key '{key}' already exists for this user."
        )));
    }
    entries.insert(key.clone(), value.clone());
    let info = UserInfo {
        url: info_url(&id, &key),
        key,
        value: Some(value),
    };
    Ok((StatusCode::CREATED, Json(info)))
}

async fn get_user_info(
    State(db): State<Db>,
    Path((id, key)): Path<(String, String)>,
) -> Result<Json<UserInfo>, ApiError> {
    let store = db.read().await;
    store.user(&id)?;
    let value = store
        .user_info
        .get(&id)
        .and_then(|entries| entries.get(&key))
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("User info with key '{key}' does not exist for this user.")))?;
    Ok(Json(UserInfo {
        url: info_url(&id, &key),
        key,
        value: Some(value),
    }))
}

async fn update_user_info(
    State(db): State<Db>,
    Path((id, key)): Path<(String, String)>,
    Json(input): Json<InfoPayload>,
) -> Result<Json<UserInfo>, ApiError> {
    let value = input
        .value
        .ok_or_else(|| ApiError::bad_request("The value cannot be null."))?;
    let mut store = db.write().await;
    store.user(&id)?;
    let slot = store
        .user_info
        .get_mut(&id)
        .and_then(|entries| entries.get_mut(&key))
        .ok_or_else(|| ApiError::not_found(format!("User info with key '{key}' does not exist for this user.")))?;
    *slot = value.clone();
    Ok(Json(UserInfo {
        url: info_url(&id, &key),
        key,
        value: Some(value),
    }))
}

async fn delete_user_info(
    State(db): State<Db>,
    Path((id, key)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.user(&id)?;
    store
        .user_info
        .get_mut(&id)
        .and_then(|entries| entries.remove(&key))
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found(format!("User info with key '{key}' does not exist for this user.")))
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

async fn list_groups(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<DataList<Group>> {
    let store = db.read().await;
    let groups = store
        .groups
        .values()
        .filter(|g| params.group_type.is_none() || g.group_type == params.group_type)
        .filter(|g| match &params.member {
            Some(user) => store.memberships.contains(&(g.id.clone(), user.clone())),
            None => true,
        })
        .cloned()
        .collect();
    Json(page(groups, &params))
}

async fn create_group(
    State(db): State<Db>,
    Json(input): Json<GroupPayload>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let id = input
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Id cannot be null."))?;
    let mut store = db.write().await;
    if store.groups.contains_key(&id) {
        return Err(ApiError::conflict(format!("A group with id '{id}' already exists.")));
    }
    let group = Group {
        url: format!("{REST_ROOT}/identity/groups/{id}"),
        id: id.clone(),
        name: input.name,
        group_type: input.group_type,
    };
    store.groups.insert(id, group.clone());
    Ok((StatusCode::CREATED, Json(group)))
}

async fn get_group(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Group>, ApiError> {
    let store = db.read().await;
    store.group(&id).cloned().map(Json)
}

async fn update_group(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<GroupPayload>,
) -> Result<Json<Group>, ApiError> {
    let mut store = db.write().await;
    let group = store
        .groups
        .get_mut(&id)
        .ok_or_else(|| ApiError::not_found(format!("Could not find a group with id '{id}'.")))?;
    set_if_some(&mut group.name, input.name);
    set_if_some(&mut group.group_type, input.group_type);
    Ok(Json(group.clone()))
}

async fn delete_group(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.group(&id)?;
    store.groups.remove(&id);
    store.memberships.retain(|(group, _)| group != &id);
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    pub user_id: Option<String>,
}

async fn add_member(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<MemberPayload>,
) -> Result<(StatusCode, Json<GroupMember>), ApiError> {
    let user_id = input
        .user_id
        .ok_or_else(|| ApiError::bad_request("UserId cannot be null."))?;
    let mut store = db.write().await;
    store.group(&id)?;
    store.user(&user_id)?;
    if !store.memberships.insert((id.clone(), user_id.clone())) {
        return Err(ApiError::conflict(format!(
            "User '{user_id}' is already part of group '{id}'."
        )));
    }
    let member = GroupMember {
        url: format!("{REST_ROOT}/identity/groups/{id}/members/{user_id}"),
        user_id,
        group_id: id,
    };
    Ok((StatusCode::CREATED, Json(member)))
}

async fn remove_member(
    State(db): State<Db>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.group(&id)?;
    if store.memberships.remove(&(id.clone(), user_id.clone())) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!(
            "User '{user_id}' is not part of group '{id}'."
        )))
    }
}

// ---------------------------------------------------------------------------
// Tasks and forms
// ---------------------------------------------------------------------------

async fn list_tasks(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<DataList<Task>> {
    let store = db.read().await;
    let tasks = store
        .tasks
        .values()
        .filter(|t| params.assignee.is_none() || t.assignee == params.assignee)
        .filter(|t| params.unassigned != Some(true) || t.assignee.is_none())
        .cloned()
        .collect();
    Json(page(tasks, &params))
}

async fn create_task(State(db): State<Db>, Json(input): Json<TaskPayload>) -> (StatusCode, Json<Task>) {
    let id = Uuid::new_v4().to_string();
    let task = Task {
        url: format!("{REST_ROOT}/runtime/tasks/{id}"),
        id: id.clone(),
        name: input.name,
        description: input.description,
        owner: input.owner,
        assignee: input.assignee,
        delegation_state: input.delegation_state,
        priority: input.priority.unwrap_or(50),
        suspended: false,
        category: input.category,
        form_key: input.form_key,
    };
    db.write().await.tasks.insert(id, task.clone());
    (StatusCode::CREATED, Json(task))
}

async fn get_task(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Task>, ApiError> {
    let store = db.read().await;
    store.task(&id).cloned().map(Json)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TaskPayload>,
) -> Result<Json<Task>, ApiError> {
    let mut store = db.write().await;
    let task = store.task_mut(&id)?;
    set_if_some(&mut task.name, input.name);
    set_if_some(&mut task.description, input.description);
    set_if_some(&mut task.owner, input.owner);
    set_if_some(&mut task.assignee, input.assignee);
    set_if_some(&mut task.delegation_state, input.delegation_state);
    set_if_some(&mut task.category, input.category);
    set_if_some(&mut task.form_key, input.form_key);
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    Ok(Json(task.clone()))
}

async fn task_action(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TaskActionPayload>,
) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    if input.action == "complete" {
        store.task(&id)?;
        store.tasks.remove(&id);
        return Ok(StatusCode::OK);
    }
    let task = store.task_mut(&id)?;
    match input.action.as_str() {
        "claim" => {
            if let (Some(current), Some(wanted)) = (&task.assignee, &input.assignee) {
                if current != wanted {
                    return Err(ApiError::conflict(format!("Task '{id}' is already claimed by someone else.")));
                }
            }
            task.assignee = input.assignee;
        }
        "delegate" => {
            let assignee = input
                .assignee
                .ok_or_else(|| ApiError::bad_request("An assignee is required when delegating a task."))?;
            if task.owner.is_none() {
                task.owner = task.assignee.take();
            }
            task.assignee = Some(assignee);
            task.delegation_state = Some("pending".to_string());
        }
        "resolve" => {
            task.assignee = task.owner.clone();
            task.delegation_state = Some("resolved".to_string());
        }
        other => return Err(ApiError::bad_request(&format!("Invalid action: '{other}'."))),
    }
    Ok(StatusCode::OK)
}

async fn delete_task(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    store.task(&id)?;
    store.tasks.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}

fn task_form(task: &Task) -> FormData {
    FormData {
        form_key: task.form_key.clone(),
        task_id: task.id.clone(),
        task_url: task.url.clone(),
        form_properties: vec![FormProperty {
            id: "comment".to_string(),
            name: "Comment".to_string(),
            property_type: "string".to_string(),
            value: None,
            readable: true,
            writable: true,
            required: false,
        }],
    }
}

async fn get_form_data(State(db): State<Db>, Query(params): Query<FormParams>) -> Result<Json<FormData>, ApiError> {
    let store = db.read().await;
    match (params.task_id, params.process_definition_id) {
        (Some(task_id), _) => Ok(Json(task_form(store.task(&task_id)?))),
        (None, Some(definition_id)) => Err(ApiError::not_found(format!(
            "Could not find a process definition with id '{definition_id}'."
        ))),
        (None, None) => Err(ApiError::bad_request(
            "The taskId or processDefinitionId parameter has to be provided",
        )),
    }
}

async fn submit_form_data(State(db): State<Db>, Json(input): Json<FormSubmitPayload>) -> Result<StatusCode, ApiError> {
    let mut store = db.write().await;
    match (input.task_id, input.process_definition_id) {
        (Some(task_id), _) => {
            store.task(&task_id)?;
            if let Some(unknown) = input.properties.iter().find(|p| p.id != "comment") {
                return Err(ApiError::bad_request(&format!(
                    "Form property '{}' does not exist (value '{}').",
                    unknown.id, unknown.value
                )));
            }
            store.tasks.remove(&task_id);
            Ok(StatusCode::NO_CONTENT)
        }
        (None, Some(definition_id)) => Err(ApiError::not_found(format!(
            "Could not find a process definition with id '{definition_id}'."
        ))),
        (None, None) => Err(ApiError::bad_request(
            "The taskId or processDefinitionId property has to be provided",
        )),
    }
}
