// lib.rs
use mlua::prelude::*;
use mlua::Lua;
use serde::de::DeserializeOwned;
use std::backtrace::Backtrace;
use std::panic;
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use velero_dashboard::log;
use velero_dashboard::structs::{ActionRequest, ContentRequest, NavigationRequest, PluginOptions};
use velero_dashboard::{KubeStore, VeleroPlugin, PLUGIN_DESCRIPTION, PLUGIN_NAME};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

type Plugin = Arc<VeleroPlugin<KubeStore>>;

fn runtime() -> LuaResult<&'static Runtime> {
    if let Some(rt) = RUNTIME.get() {
        return Ok(rt);
    }
    let rt = Runtime::new().map_err(LuaError::external)?;
    Ok(RUNTIME.get_or_init(|| rt))
}

/// Decode a request table; `nil` stands for the default request.
fn decode<T: DeserializeOwned + Default>(lua: &Lua, value: LuaValue) -> LuaResult<T> {
    match value {
        LuaValue::Nil => Ok(T::default()),
        value => lua.from_value(value),
    }
}

fn navigation(plugin: Plugin) -> impl Fn(&Lua, LuaValue) -> LuaResult<LuaValue> {
    move |lua, request| {
        let request: NavigationRequest = decode(lua, request)?;
        lua.to_value(&plugin.navigation(&request))
    }
}

fn handle_action(plugin: Plugin) -> impl Fn(&Lua, (String, LuaValue)) -> LuaResult<()> {
    move |lua, (action_name, payload)| {
        let payload: serde_json::Value = lua.from_value(payload)?;
        plugin
            .handle_action(&ActionRequest::new(action_name, payload))
            .map_err(LuaError::external)
    }
}

fn content(plugin: Plugin) -> impl Fn(&Lua, LuaValue) -> LuaResult<LuaValue> {
    move |lua, request| {
        let request: ContentRequest = decode(lua, request)?;
        let rt = runtime()?;

        let response = rt.block_on(plugin.build_content(&request, &CancellationToken::new()));
        lua.to_value(&response)
    }
}

/// Connect to the cluster and hand the plugin description and callbacks to the host.
#[tracing::instrument(skip(lua, opts))]
fn register(lua: &Lua, opts: LuaValue) -> LuaResult<LuaTable> {
    let options: PluginOptions = decode(lua, opts)?;
    let store = runtime()?
        .block_on(KubeStore::from_kubeconfig(options.context))
        .map_err(LuaError::external)?;
    let plugin: Plugin = Arc::new(VeleroPlugin::new(store));

    let exports = lua.create_table()?;
    exports.set("name", PLUGIN_NAME)?;
    exports.set("description", PLUGIN_DESCRIPTION)?;
    exports.set("capabilities", lua.to_value(&plugin.capabilities())?)?;
    exports.set("navigation", lua.create_function(navigation(plugin.clone()))?)?;
    exports.set(
        "handle_action",
        lua.create_function(handle_action(plugin.clone()))?,
    )?;
    exports.set("content", lua.create_function(content(plugin.clone()))?)?;
    exports.set(
        "current_namespace",
        lua.create_function(move |_, ()| Ok(plugin.current_namespace()))?,
    )?;

    info!(plugin = PLUGIN_NAME, "Starting plugin");
    Ok(exports)
}

#[mlua::lua_module(skip_memory_check)]
fn velero_plugin(lua: &Lua) -> LuaResult<mlua::Table> {
    let exports = lua.create_table()?;
    exports.set(
        "init_logging",
        lua.create_function(|_, path: String| {
            log::setup_logger(&path).map_err(|e| LuaError::external(format!("{:?}", e)))
        })?,
    )?;

    let default = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let bt = Backtrace::force_capture();
        error!(target: "panic",
               "panic: {panic_info}\n\nBacktrace:\n{bt}");
        default(panic_info);
    }));

    exports.set("register", lua.create_function(register)?)?;

    Ok(exports)
}
