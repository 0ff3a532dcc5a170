use std::process::ExitCode;

use anyhow::{Context, Result};
use helmdapr_config::AppConfig;
use helmdapr_core::cluster::{list_response, new_namespace, object_response, status_response, ApiRequest, ApiResponse};
use helmdapr_core::release::Values;
use helmdapr_core::{
    execute_install, execute_install_with, ClusterApi, FakeReleaseClient, HelmDapr, InstallOutcome, InstallRequest,
    Installer, KubeCluster, PodSummary, ReleaseInstaller, TracingReporter,
};
use http::{Method, StatusCode};
use k8s_openapi::api::core::v1::{Namespace, Pod, PodSpec, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde_json::Value;
use tracing::info;

use crate::cli::Command;

pub async fn run(command: Command, config: &AppConfig) -> Result<ExitCode> {
    match command {
        Command::Install { id, name } => {
            let mut installer = HelmDapr::with_conf(config.installer.conf.clone());
            Ok(finish(install(id, &name, &mut installer)))
        }
        Command::Uninstall { id } => {
            let mut installer = HelmDapr::with_conf(config.installer.conf.clone());
            installer.uninstall(id)?;
            println!("uninstalled {id}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Release { chart, namespace, id, values } => {
            let chart = chart.unwrap_or_else(|| config.installer.chart.clone());
            let namespace = namespace.unwrap_or_else(|| config.installer.release_namespace.clone());
            let mut installer =
                ReleaseInstaller::new(FakeReleaseClient::new(), namespace).with_values(parse_values(&values)?);
            Ok(finish(install(id, &chart, &mut installer)))
        }
        Command::Demo => {
            for line in demo(config).await? {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::InitConfig => {
            let path = AppConfig::init_default()?;
            println!("Wrote {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn install<I: Installer + ?Sized>(id: i64, name: &str, installer: &mut I) -> InstallOutcome {
    let outcome = execute_install_with(id, &InstallRequest::new(name), installer, &TracingReporter);
    println!("{outcome}");
    outcome
}

fn finish(outcome: InstallOutcome) -> ExitCode {
    if outcome.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Creates `testing`, lists namespaces, lists pods through the node reactor,
/// then runs the sample installer. Returns the lines to print.
async fn demo(config: &AppConfig) -> Result<Vec<String>> {
    let mut namespaces = Vec::new();
    let (cluster, server) = KubeCluster::fake(move |request| demo_reactor(&mut namespaces, request));
    let mut lines = Vec::new();

    let created = cluster.create_namespace(&new_namespace("testing")).await?;
    lines.push(created.metadata.name.unwrap_or_default());

    for ns in cluster.list_namespaces().await? {
        lines.push(format!("Name: {}", ns.metadata.name.unwrap_or_default()));
    }

    let pods = cluster.list_pods(Some(config.cluster.default_namespace.as_str())).await?;
    lines.extend(render_table(&pods.iter().map(PodSummary::from).collect::<Vec<_>>()));

    drop(cluster);
    let served = server.finish().await?;
    info!("Fake API server answered {served} requests");

    let mut installer = HelmDapr::with_conf(config.installer.conf.clone());
    execute_install(100, &InstallRequest::new("aabbcc"), &mut installer);
    Ok(lines)
}

/// Keeps created namespaces in memory and answers every pod list with three
/// pods scheduled on nodes `aaa`, `bbb` and `ccc`.
fn demo_reactor(namespaces: &mut Vec<Namespace>, request: &ApiRequest) -> ApiResponse {
    let path = request.uri().path();
    match (request.method(), path) {
        (&Method::POST, "/api/v1/namespaces") => match serde_json::from_slice::<Namespace>(request.body()) {
            Ok(ns) => {
                namespaces.push(ns.clone());
                object_response(StatusCode::CREATED, &ns)
            }
            Err(e) => status_response(StatusCode::BAD_REQUEST, "BadRequest", &e.to_string()),
        },
        (&Method::GET, "/api/v1/namespaces") => list_response(namespaces.clone()),
        (&Method::GET, _) if path.ends_with("/pods") => {
            let namespace = path.strip_prefix("/api/v1/namespaces/").and_then(|rest| rest.strip_suffix("/pods"));
            list_response(["aaa", "bbb", "ccc"].into_iter().map(|node| scheduled_pod(node, namespace)).collect())
        }
        _ => status_response(StatusCode::NOT_FOUND, "NotFound", &format!("{path} not found")),
    }
}

fn scheduled_pod(node: &str, namespace: Option<&str>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(format!("pod-{node}")),
            namespace: namespace.map(str::to_string),
            ..Default::default()
        },
        spec: Some(PodSpec { node_name: Some(node.into()), ..Default::default() }),
        status: Some(PodStatus { phase: Some("Running".into()), ..Default::default() }),
    }
}

/// Parses `key=value` pairs. Values that are valid JSON keep their type.
pub fn parse_values(pairs: &[String]) -> Result<Values> {
    let mut values = Values::new();
    for pair in pairs {
        let (key, raw) = pair.split_once('=').with_context(|| format!("Expected key=value, got {pair:?}"))?;
        if key.is_empty() {
            anyhow::bail!("Empty key in {pair:?}");
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        values.insert(key.to_string(), value);
    }
    Ok(values)
}

fn render_table(rows: &[PodSummary]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["No resources found".into()];
    }

    let mut widths = PodSummary::HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: [&str; 4]| {
        let padded: Vec<String> = cells.iter().zip(widths).map(|(cell, w)| format!("{cell:<w$}")).collect();
        padded.join("   ").trim_end().to_string()
    };
    std::iter::once(render(PodSummary::HEADERS)).chain(rows.iter().map(|row| render(row.cells()))).collect()
}
