//! Webhook 管理操作

use shadowpay_client::{
    DeactivateWebhookRequest, DeactivateWebhookResponse, RegisterWebhookRequest,
    RegisterWebhookResponse, TestWebhookRequest, TestWebhookResponse, WebhookConfigResponse,
    WebhookLogsRequest, WebhookLogsResponse, WebhookStatsResponse,
};

use super::parse::{field, optional, split_and_trim};
use super::{report, status_word, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

/// 日志条数留空或非法时的默认值
const DEFAULT_LOG_LIMIT: u32 = 50;

/// 日志列表最多展示的条数
const LOGS_SHOWN: usize = 10;

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "➕",
        label: "Register Webhook",
        action: MenuAction::Form(FormSpec {
            title: "➕ Register Webhook",
            fields: &[
                "Webhook URL (https://...)",
                "Events (comma-separated)",
                "Secret (optional)",
            ],
            submit: register,
        }),
    },
    MenuItem {
        icon: "⚙️ ",
        label: "Get Configuration",
        action: MenuAction::Run(config),
    },
    MenuItem {
        icon: "🧪",
        label: "Test Webhook",
        action: MenuAction::Form(FormSpec {
            title: "🧪 Test Webhook",
            fields: &["Webhook ID (optional)", "Event Type (optional)"],
            submit: test,
        }),
    },
    MenuItem {
        icon: "📜",
        label: "View Logs",
        action: MenuAction::Form(FormSpec {
            title: "📜 View Webhook Logs",
            fields: &["Webhook ID (optional)", "Limit (default 50)"],
            submit: logs,
        }),
    },
    MenuItem {
        icon: "📊",
        label: "Get Stats",
        action: MenuAction::Run(stats),
    },
    MenuItem {
        icon: "🚫",
        label: "Deactivate Webhook",
        action: MenuAction::Form(FormSpec {
            title: "🚫 Deactivate Webhook",
            fields: &["Webhook ID"],
            submit: deactivate,
        }),
    },
    BACK,
];

fn register(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = RegisterWebhookRequest {
        url: field(&values, 0).to_string(),
        events: split_and_trim(field(&values, 1)),
        secret: optional(field(&values, 2)),
    };

    Ok(Command::new("Registering webhook", async move {
        let resp = client
            .register_webhook(&req)
            .await
            .map_err(|e| report("register webhook", e))?;
        Ok(format_register(&resp))
    }))
}

fn config(client: SharedClient) -> Command {
    Command::new("Loading webhook configuration", async move {
        let resp = client
            .webhook_config()
            .await
            .map_err(|e| report("webhook config", e))?;
        Ok(format_config(&resp))
    })
}

fn test(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = TestWebhookRequest {
        webhook_id: optional(field(&values, 0)),
        event: optional(field(&values, 1)),
    };

    Ok(Command::new("Sending test webhook", async move {
        let resp = client
            .test_webhook(&req)
            .await
            .map_err(|e| report("test webhook", e))?;
        Ok(format_test(&resp))
    }))
}

fn logs(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = WebhookLogsRequest {
        webhook_id: optional(field(&values, 0)),
        limit: Some(parse_limit(field(&values, 1))),
        ..Default::default()
    };

    Ok(Command::new("Loading webhook logs", async move {
        let resp = client
            .webhook_logs(&req)
            .await
            .map_err(|e| report("webhook logs", e))?;
        Ok(format_logs(&resp))
    }))
}

fn stats(client: SharedClient) -> Command {
    Command::new("Loading webhook stats", async move {
        let resp = client
            .webhook_stats()
            .await
            .map_err(|e| report("webhook stats", e))?;
        Ok(format_stats(&resp))
    })
}

fn deactivate(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = DeactivateWebhookRequest {
        webhook_id: field(&values, 0).to_string(),
    };

    Ok(Command::new("Deactivating webhook", async move {
        let resp = client
            .deactivate_webhook(&req)
            .await
            .map_err(|e| report("deactivate webhook", e))?;
        Ok(format_deactivate(&resp))
    }))
}

/// 非正数或无法解析时回退到默认值
fn parse_limit(input: &str) -> u32 {
    match input.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_LOG_LIMIT,
    }
}

fn format_register(resp: &RegisterWebhookResponse) -> String {
    format!(
        "Register Webhook: {}\nWebhook ID: {}\nURL: {}\nEvents: [{}]\nCreated: {}\n{}",
        status_word(resp.success),
        resp.webhook_id,
        resp.url,
        resp.events.join(", "),
        resp.created_at,
        resp.message
    )
}

fn format_config(resp: &WebhookConfigResponse) -> String {
    let active = if resp.active {
        "Active ✓"
    } else {
        "Inactive ❌"
    };
    format!(
        "Webhook Configuration:\nWebhook ID: {}\nURL: {}\nEvents: [{}]\nStatus: {active}\nCreated: {}\nUpdated: {}",
        resp.webhook_id,
        resp.url,
        resp.events.join(", "),
        resp.created_at,
        resp.updated_at
    )
}

fn format_test(resp: &TestWebhookResponse) -> String {
    let status = if resp.success {
        "Success ✓"
    } else {
        "Failed ❌"
    };
    let mut out = format!(
        "Test Webhook: {status}\nStatus Code: {}\nResponse Time: {} ms\n{}",
        resp.status_code, resp.response_time, resp.message
    );
    if !resp.error.is_empty() {
        out.push_str(&format!("\nError: {}", resp.error));
    }
    out
}

fn format_logs(resp: &WebhookLogsResponse) -> String {
    let mut out = format!("Webhook Logs (Total: {}):", resp.total_count);
    if resp.logs.is_empty() {
        out.push_str("\nNo logs found");
        return out;
    }

    for entry in resp.logs.iter().take(LOGS_SHOWN) {
        let mark = if entry.success { "✓" } else { "❌" };
        out.push_str(&format!(
            "\n{mark} {} | Event: {} | Code: {} | Time: {}ms | Attempt: {}\n   {}",
            entry.timestamp,
            entry.event,
            entry.status_code,
            entry.response_time,
            entry.attempt,
            entry.id
        ));
    }
    if resp.logs.len() > LOGS_SHOWN {
        out.push_str(&format!(
            "\n... and {} more",
            resp.logs.len() - LOGS_SHOWN
        ));
    }
    out
}

fn format_stats(resp: &WebhookStatsResponse) -> String {
    format!(
        "Webhook Statistics:\nTotal Deliveries: {}\nSuccessful: {}\nFailed: {}\nSuccess Rate: {:.1}%\nAvg Response Time: {} ms\nLast Delivery: {}\nLast Success: {}\nLast Failure: {}",
        resp.total_deliveries,
        resp.successful_deliveries,
        resp.failed_deliveries,
        resp.success_rate,
        resp.average_response_time,
        resp.last_delivery,
        resp.last_success,
        resp.last_failure
    )
}

fn format_deactivate(resp: &DeactivateWebhookResponse) -> String {
    format!(
        "Deactivate Webhook: {}\nWebhook ID: {}\n{}",
        status_word(resp.success),
        resp.webhook_id,
        resp.message
    )
}
