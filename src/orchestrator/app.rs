//! 交互应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：会话日志、题库客户端、通知器、各控制器
//! 2. **命令循环**：逐行读取用户命令，一次只执行一个操作
//! 3. **结果呈现**：把批次、列表、统计渲染到终端
//!
//! 所有业务契约都在 services 层，本层只做接线和渲染

use crate::clients::{HttpStoreClient, QuestionStore};
use crate::config::Config;
use crate::models::Stats;
use crate::services::{
    DeletionController, GenerationController, ListingCache, NotificationPort, PersistenceGate,
    SessionNotifier, StatsController,
};
use crate::utils::logging;
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// 应用主结构
pub struct App {
    config: Config,
    generation: GenerationController,
    gate: PersistenceGate,
    listing: ListingCache,
    deletion: DeletionController,
    stats: StatsController,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 初始化会话日志文件
        logging::init_log_file(&config.output_log_file)?;

        log_startup(&config);

        let store: Arc<dyn QuestionStore> = Arc::new(HttpStoreClient::new(&config)?);
        let notifier: Arc<dyn NotificationPort> =
            Arc::new(SessionNotifier::with_path(&config.output_log_file));

        Ok(Self {
            generation: GenerationController::new(&config, store.clone(), notifier.clone()),
            gate: PersistenceGate::new(store.clone(), notifier.clone()),
            listing: ListingCache::new(store.clone(), notifier.clone()),
            deletion: DeletionController::new(store.clone(), notifier.clone()),
            stats: StatsController::new(store, notifier),
            config,
        })
    }

    /// 运行命令循环
    pub async fn run(&mut self) -> Result<()> {
        print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => break,
            };

            if self.handle_command(line.trim()).await {
                break;
            }
        }

        info!("👋 会话结束，日志已保存至: {}", self.config.output_log_file);

        Ok(())
    }

    /// 处理单条命令，返回是否退出
    async fn handle_command(&mut self, line: &str) -> bool {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "gen" => self.handle_generate(rest).await,
            "save" => self.handle_save().await,
            "list" => self.handle_list().await,
            "del" => self.handle_delete_by_title(rest).await,
            "delid" => self.handle_delete_by_id(rest).await,
            "stats" => self.handle_stats().await,
            "help" => print_help(),
            "quit" | "exit" => return true,
            other => println!("未知命令: {}，输入 help 查看用法", other),
        }

        false
    }

    // ========== 命令处理 ==========

    /// `gen [数量] <岗位名称>`，省略数量时使用配置默认值
    async fn handle_generate(&mut self, rest: &str) {
        let rest = rest.trim();
        let (count, job_title) = match rest.split_once(' ') {
            Some((first, remainder)) => match first.parse::<u8>() {
                Ok(count) => (count, remainder),
                Err(_) => (self.config.default_num_questions, rest),
            },
            None => (self.config.default_num_questions, rest),
        };

        if let Err(e) = self.generation.generate(job_title, count).await {
            debug!("生成命令失败: {}", e);
            return;
        }

        self.print_batch();
    }

    async fn handle_save(&mut self) {
        if let Err(e) = self.gate.save(self.generation.session_mut()).await {
            debug!("保存命令失败: {}", e);
        }
    }

    async fn handle_list(&mut self) {
        if let Err(e) = self.listing.refresh().await {
            debug!("列表命令失败: {}", e);
            return;
        }

        self.print_listing();
    }

    async fn handle_delete_by_title(&mut self, job_title: &str) {
        if let Err(e) = self
            .deletion
            .delete_by_job_title(&mut self.listing, job_title)
            .await
        {
            debug!("删除命令失败: {}", e);
            return;
        }

        self.print_listing();
    }

    async fn handle_delete_by_id(&mut self, rest: &str) {
        let id = match rest.trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                println!("用法: delid <题目ID>");
                return;
            }
        };

        if let Err(e) = self.deletion.delete_by_id(&mut self.listing, id).await {
            debug!("删除命令失败: {}", e);
            return;
        }

        self.print_listing();
    }

    async fn handle_stats(&mut self) {
        match self.stats.fetch_stats().await {
            Ok(stats) => print_stats(&stats),
            Err(e) => debug!("统计命令失败: {}", e),
        }
    }

    // ========== 渲染 ==========

    fn print_batch(&self) {
        let batch = match self.generation.session().batch() {
            Some(batch) => batch,
            None => return,
        };

        println!("\n—— 已生成的题目（岗位: {}）——", batch.job_title);
        for (i, q) in batch.questions.iter().enumerate() {
            println!("  {}. [{}] {}", i + 1, q.question_type, q.text);
        }
        println!("（输入 save 保存到题库，每个批次只能保存一次）\n");
    }

    fn print_listing(&self) {
        if !self.listing.is_visible() {
            println!("（暂无可展示的题目列表）");
            return;
        }

        println!("\n—— 题库中的全部题目 ——");
        for set in self.listing.sets() {
            println!("岗位: {}", set.job_title);
            for q in &set.questions {
                println!("  [{}] {}", q.question_type, q.text);
            }
        }
        println!();
    }
}

// ========== 日志与帮助辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 面试题管理模式");
    info!("🌐 题库服务地址: {}", config.store_api_base_url);
    info!("{}", "=".repeat(60));
}

fn print_help() {
    println!("可用命令:");
    println!("  gen [数量] <岗位名称>   生成面试题（数量 1-10，默认 2）");
    println!("  save                    保存当前批次到题库");
    println!("  list                    查看题库中的全部题目");
    println!("  del <岗位名称>          删除该岗位的全部题目");
    println!("  delid <题目ID>          按ID删除单道题目");
    println!("  stats                   查看聚合统计");
    println!("  quit                    退出");
}

fn print_stats(stats: &Stats) {
    println!("\n—— 题库统计 ——");
    println!("题目总数: {}", stats.total_questions);
    println!("按岗位:");
    for (job_title, count) in &stats.by_job_title {
        println!("  {}: {}", job_title, count);
    }
    println!("按类型:");
    for (question_type, count) in &stats.by_type {
        println!("  {}: {}", question_type, count);
    }
    println!();
}
