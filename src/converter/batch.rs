/// 把输入切分为不超过 `limit` 的连续批次，保持原有顺序
///
/// `limit` 为 0 时按 1 处理
pub fn split_batches<T>(items: &[T], limit: usize) -> Vec<&[T]> {
    items.chunks(limit.max(1)).collect()
}

/// 批次数量，即 ceil(len / limit)
pub fn batch_count(len: usize, limit: usize) -> usize {
    len.div_ceil(limit.max(1))
}
