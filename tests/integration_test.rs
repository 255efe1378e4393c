//! 真机集成测试
//!
//! 需要本地先启动题库服务（默认 http://localhost:8000）

use interview_prep_client::utils::logging;
use interview_prep_client::{Config, HttpStoreClient, QuestionStore};

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_generate_and_save_roundtrip() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let client = HttpStoreClient::new(&config).expect("题库地址配置错误");

    // 生成一批题目
    let questions = client
        .generate("Integration Test Engineer", 2)
        .await
        .expect("生成题目失败");
    assert_eq!(questions.len(), 2, "应该返回 2 道题目");

    // 保存并确认数量
    let batch = interview_prep_client::QuestionBatch {
        job_title: "Integration Test Engineer".to_string(),
        questions,
    };
    let saved = client.create(&batch).await.expect("保存题目失败");
    assert_eq!(saved, 2, "题库应确认保存 2 道题目");

    // 清理：按岗位删除
    let message = client
        .delete_by_job_title("Integration Test Engineer")
        .await
        .expect("删除题目失败");
    println!("清理完成: {}", message);
}

#[tokio::test]
#[ignore]
async fn test_list_all() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let client = HttpStoreClient::new(&config).expect("题库地址配置错误");

    let sets = client.list_all().await.expect("拉取列表失败");
    println!("题库中共 {} 个题目集合", sets.len());
}

#[tokio::test]
#[ignore]
async fn test_stats_snapshot_is_consistent() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let client = HttpStoreClient::new(&config).expect("题库地址配置错误");

    let stats = client.fetch_stats().await.expect("获取统计失败");
    assert!(
        stats.is_consistent(),
        "统计总数应等于按岗位与按类型的分项之和"
    );
}
