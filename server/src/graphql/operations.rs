//! Operations
//!
//! Every operation the frontend sends, dispatched by name. The response
//! shape of each operation is fixed: it carries every field the frontend's
//! document selects.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::connection::{connection_from_slice, cursor_for_object_in_connection, ConnectionArgs};
use super::global_id::{from_global_id, global_id_of, to_global_id};
use super::request::{GraphQLError, GraphQLRequest, GraphQLResponse};
use crate::domain::{Entity, Todo, TodoStatus, User};
use crate::repository::TodoRepository;

/// Run a request against the repository
pub async fn execute(repo: &TodoRepository, request: &GraphQLRequest) -> GraphQLResponse {
    match dispatch(repo, request).await {
        Ok(data) => GraphQLResponse::data(data),
        Err(e) => {
            log::warn!(
                "Operation {} failed: {}",
                request.resolved_operation_name().unwrap_or_else(|| "<anonymous>".to_string()),
                e
            );
            GraphQLResponse::error(&e)
        }
    }
}

async fn dispatch(repo: &TodoRepository, request: &GraphQLRequest) -> Result<Value, GraphQLError> {
    let name = request
        .resolved_operation_name()
        .ok_or(GraphQLError::MissingOperationName)?;
    let variables = match &request.variables {
        Some(Value::Null) | None => json!({}),
        Some(variables) => variables.clone(),
    };
    log::debug!("Executing {}", name);

    match name.as_str() {
        "TodoAppQuery" => todo_app_query(repo, parse(variables)?).await,
        "NodeQuery" => node_query(repo, parse(variables)?).await,
        "AddTodoMutation" => add_todo(repo, parse_input(variables)?).await,
        "ChangeTodoStatusMutation" => change_todo_status(repo, parse_input(variables)?).await,
        "MarkAllTodosMutation" => mark_all_todos(repo, parse_input(variables)?).await,
        "RemoveCompletedTodosMutation" => remove_completed_todos(repo, parse_input(variables)?).await,
        "RemoveTodoMutation" => remove_todo(repo, parse_input(variables)?).await,
        "RenameTodoMutation" => rename_todo(repo, parse_input(variables)?).await,
        _ => Err(GraphQLError::UnknownOperation(name)),
    }
}

fn parse<T: DeserializeOwned>(variables: Value) -> Result<T, GraphQLError> {
    Ok(serde_json::from_value(variables)?)
}

#[derive(Deserialize)]
struct InputVariables<T> {
    input: T,
}

fn parse_input<T: DeserializeOwned>(variables: Value) -> Result<T, GraphQLError> {
    let wrapped: InputVariables<T> = parse(variables)?;
    Ok(wrapped.input)
}

fn todo_id(global_id: &str) -> Result<u32, GraphQLError> {
    from_global_id(global_id)
        .filter(|resolved| resolved.type_name == Todo::TYPE_NAME)
        .and_then(|resolved| resolved.id.parse().ok())
        .ok_or_else(|| GraphQLError::InvalidId {
            expected: Todo::TYPE_NAME,
            id: global_id.to_string(),
        })
}

// ========================
// Object shapes
// ========================

fn todo_node(todo: &Todo) -> Value {
    json!({
        "id": global_id_of(todo),
        "text": todo.text,
        "complete": todo.complete,
    })
}

/// Viewer fields other than the todo connection
async fn viewer_summary(repo: &TodoRepository) -> Value {
    json!({
        "id": global_id_of(&User::viewer()),
        "totalCount": repo.total_count().await,
        "completedCount": repo.completed_count().await,
    })
}

// ========================
// Queries
// ========================

#[derive(Deserialize)]
struct TodoAppVariables {
    #[serde(default)]
    status: Option<String>,
    #[serde(flatten)]
    connection: ConnectionArgs,
}

async fn todo_app_query(repo: &TodoRepository, variables: TodoAppVariables) -> Result<Value, GraphQLError> {
    let status: TodoStatus = match variables.status.as_deref() {
        Some(status) => status.parse()?,
        None => TodoStatus::default(),
    };
    let todos = repo.get_todos(status.complete_filter()).await;
    let connection = connection_from_slice(&todos, &variables.connection)?;

    let edges: Vec<Value> = connection
        .edges
        .iter()
        .map(|edge| json!({ "cursor": edge.cursor, "node": todo_node(&edge.node) }))
        .collect();

    let mut viewer = viewer_summary(repo).await;
    viewer["todos"] = json!({
        "edges": edges,
        "pageInfo": connection.page_info,
    });
    Ok(json!({ "viewer": viewer }))
}

#[derive(Deserialize)]
struct NodeVariables {
    id: String,
}

async fn node_query(repo: &TodoRepository, variables: NodeVariables) -> Result<Value, GraphQLError> {
    let node = match from_global_id(&variables.id) {
        Some(resolved) if resolved.type_name == Todo::TYPE_NAME => match resolved.id.parse::<u32>() {
            Ok(id) => repo
                .get_todo(id)
                .await
                .ok()
                .map(|todo| with_typename(todo_node(&todo), Todo::TYPE_NAME)),
            Err(_) => None,
        },
        Some(resolved) if resolved.type_name == User::TYPE_NAME => match repo.get_user(&resolved.id).await {
            Ok(_) => Some(with_typename(viewer_summary(repo).await, User::TYPE_NAME)),
            Err(_) => None,
        },
        _ => None,
    };
    Ok(json!({ "node": node }))
}

fn with_typename(mut object: Value, type_name: &str) -> Value {
    object["__typename"] = json!(type_name);
    object
}

// ========================
// Mutations
// ========================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTodoInput {
    text: String,
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn add_todo(repo: &TodoRepository, input: AddTodoInput) -> Result<Value, GraphQLError> {
    let todo = repo.add_todo(input.text, false).await;
    let all = repo.get_todos(None).await;
    let cursor = cursor_for_object_in_connection(&all, &todo);

    Ok(json!({
        "addTodo": {
            "clientMutationId": input.client_mutation_id,
            "todoEdge": { "cursor": cursor, "node": todo_node(&todo) },
            "viewer": viewer_summary(repo).await,
        }
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangeTodoStatusInput {
    id: String,
    complete: bool,
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn change_todo_status(repo: &TodoRepository, input: ChangeTodoStatusInput) -> Result<Value, GraphQLError> {
    let todo = repo.change_todo_complete(todo_id(&input.id)?, input.complete).await?;

    Ok(json!({
        "changeTodoStatus": {
            "clientMutationId": input.client_mutation_id,
            "todo": todo_node(&todo),
            "viewer": viewer_summary(repo).await,
        }
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkAllTodosInput {
    complete: bool,
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn mark_all_todos(repo: &TodoRepository, input: MarkAllTodosInput) -> Result<Value, GraphQLError> {
    let changed: Vec<Value> = repo
        .mark_all_todos(input.complete)
        .await
        .iter()
        .map(todo_node)
        .collect();

    Ok(json!({
        "markAllTodos": {
            "clientMutationId": input.client_mutation_id,
            "changedTodos": changed,
            "viewer": viewer_summary(repo).await,
        }
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveCompletedTodosInput {
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn remove_completed_todos(
    repo: &TodoRepository,
    input: RemoveCompletedTodosInput,
) -> Result<Value, GraphQLError> {
    let deleted: Vec<String> = repo
        .remove_completed_todos()
        .await
        .iter()
        .map(|id| to_global_id(Todo::TYPE_NAME, &id.to_string()))
        .collect();

    Ok(json!({
        "removeCompletedTodos": {
            "clientMutationId": input.client_mutation_id,
            "deletedTodoIds": deleted,
            "viewer": viewer_summary(repo).await,
        }
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveTodoInput {
    id: String,
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn remove_todo(repo: &TodoRepository, input: RemoveTodoInput) -> Result<Value, GraphQLError> {
    repo.remove_todo(todo_id(&input.id)?).await?;

    Ok(json!({
        "removeTodo": {
            "clientMutationId": input.client_mutation_id,
            "deletedTodoId": input.id,
            "viewer": viewer_summary(repo).await,
        }
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenameTodoInput {
    id: String,
    text: String,
    #[serde(default)]
    client_mutation_id: Option<Value>,
}

async fn rename_todo(repo: &TodoRepository, input: RenameTodoInput) -> Result<Value, GraphQLError> {
    let todo = repo.rename_todo(todo_id(&input.id)?, input.text).await?;

    Ok(json!({
        "renameTodo": {
            "clientMutationId": input.client_mutation_id,
            "todo": todo_node(&todo),
        }
    }))
}
