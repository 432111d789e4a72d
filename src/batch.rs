//! 批量分析
//!
//! 每个表达式相互独立，用固定大小的线程池并行处理，结果按输入顺序返回

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{AnalysisCache, SharedResult};
use crate::config::BATCH_QUEUE_CAPACITY;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// 把文件内容拆成 (行号, 表达式)
///
/// 行号从1开始；空行和以 `#` 开头的注释行被跳过，行尾空白被去掉
pub fn parse_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.trim_start().is_empty() && !line.trim_start().starts_with('#'))
        .map(|(line_no, line)| (line_no, line.to_string()))
        .collect()
}

/// 一行表达式的分析结果
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// 行号（从1开始）
    pub line: usize,
    pub source: String,
    pub result: SharedResult,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// 批量分析器
pub struct BatchAnalyzer {
    workers: Vec<Worker>,
    sender: Option<Sender<Task>>,
    cache: Arc<AnalysisCache>,
}

impl BatchAnalyzer {
    /// 创建线程池，size 为 0 时按 1 处理
    pub fn new(size: usize, cache: Arc<AnalysisCache>) -> std::io::Result<Self> {
        let size = size.max(1);
        let (sender, receiver) = bounded(BATCH_QUEUE_CAPACITY);
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::new(id, Arc::clone(&receiver))?);
        }
        info!(workers = size, "batch analyzer started");

        Ok(Self {
            workers,
            sender: Some(sender),
            cache,
        })
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// 分析所有 (行号, 表达式)，结果顺序与输入一致
    pub fn analyze_all<I>(&self, lines: I) -> Vec<BatchEntry>
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let (result_tx, result_rx) = unbounded();
        let mut submitted = 0;

        for (index, (line, source)) in lines.into_iter().enumerate() {
            let cache = Arc::clone(&self.cache);
            let result_tx = result_tx.clone();
            let task: Task = Box::new(move || {
                let result = cache.get_or_analyze(&source);
                let _ = result_tx.send((index, BatchEntry { line, source, result }));
            });
            if self.execute(task) {
                submitted += 1;
            }
        }
        drop(result_tx);

        let mut entries: Vec<(usize, BatchEntry)> = result_rx.iter().take(submitted).collect();
        entries.sort_by_key(|(index, _)| *index);
        debug!(count = entries.len(), "batch complete");
        entries.into_iter().map(|(_, entry)| entry).collect()
    }

    /// 提交任务，返回是否成功入队
    fn execute(&self, task: Task) -> bool {
        let Some(sender) = &self.sender else {
            return false;
        };
        if sender.send(task).is_err() {
            warn!("worker queue closed, task dropped");
            return false;
        }
        true
    }
}

impl Drop for BatchAnalyzer {
    fn drop(&mut self) {
        // 关闭队列，工作线程在 recv 失败后退出
        self.sender.take();
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                if thread.join().is_err() {
                    warn!(id = worker.id, "worker panicked");
                }
            }
        }
    }
}

struct Worker {
    id: usize,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    fn new(id: usize, receiver: Arc<Mutex<Receiver<Task>>>) -> std::io::Result<Self> {
        let thread = std::thread::Builder::new()
            .name(format!("lex-worker-{}", id))
            .spawn(move || loop {
                let task = {
                    let receiver = receiver.lock();
                    receiver.recv()
                };
                match task {
                    Ok(task) => task(),
                    Err(_) => break,
                }
            })?;
        Ok(Self {
            id,
            thread: Some(thread),
        })
    }
}
