//! 正文分节器
//!
//! 将社论正文切分为固定数量的排版小节，供栏目模板摆放。
//! 切分按层级回退：段落层 → 句子层 → 字符层

/// 段落分隔符（两个连续换行）
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// 将正文切分为 3 节（三栏布局）
///
/// 切分策略：
/// 1. 段落数超过 3：按段落分成 3 组，余数优先补给靠前的组
/// 2. 段落数为 2 或 3：逐段对应一节，不足补空节
/// 3. 单段落且句子数超过 3：按句子分成 3 组，组内用空格连接
/// 4. 兜底：按字符长度切成 3 片
///
/// 对任意输入总是返回恰好 3 节，空文本返回 3 个空节
pub fn split_three(text: &str) -> [String; 3] {
    let text = text.trim();

    let sections = paragraph_tier_three(text)
        .or_else(|| sentence_tier_three(text))
        .unwrap_or_else(|| character_tier(text, 3));

    into_sections(sections)
}

/// 将正文切分为 5 节（报纸布局：两节通栏 + 三节配图）
///
/// 切分策略：
/// 1. 段落数不少于 5：前四段各占一节，剩余段落全部并入第五节
/// 2. 段落数为 2~4：逐段填充，空缺的节留空（第四节优先留空）
/// 3. 单段落且句子数不少于 5：按句子分成 5 组，组内用空格连接
/// 4. 单段落句子不足：按字符长度切成 5 片
/// 5. 无段落：直接返回 5 个空节
pub fn split_five(text: &str) -> [String; 5] {
    let text = text.trim();

    let sections = paragraph_tier_five(text)
        .or_else(|| sentence_tier_five(text))
        .unwrap_or_else(|| character_tier(text, 5));

    into_sections(sections)
}

/// 段落层（3 节）：段落数达到 2 时生效
fn paragraph_tier_three(text: &str) -> Option<Vec<String>> {
    let paragraphs = split_paragraphs(text);

    if paragraphs.len() > 3 {
        return Some(join_groups(&paragraphs, 3, PARAGRAPH_SEPARATOR));
    }

    if paragraphs.len() >= 2 {
        let mut sections: Vec<String> =
            paragraphs.iter().map(|p| p.to_string()).collect();
        sections.resize_with(3, String::new);
        return Some(sections);
    }

    None
}

/// 段落层（5 节）：除单段落外都在此层定型
fn paragraph_tier_five(text: &str) -> Option<Vec<String>> {
    let paragraphs = split_paragraphs(text);

    match paragraphs.len() {
        // 前四段各占一节，尾部段落保持段落分隔并入第五节
        n if n >= 5 => Some(vec![
            paragraphs[0].to_string(),
            paragraphs[1].to_string(),
            paragraphs[2].to_string(),
            paragraphs[3].to_string(),
            paragraphs[4..].join(PARAGRAPH_SEPARATOR),
        ]),
        4 => Some(vec![
            paragraphs[0].to_string(),
            paragraphs[1].to_string(),
            paragraphs[2].to_string(),
            String::new(),
            paragraphs[3].to_string(),
        ]),
        2 | 3 => {
            let mut sections: Vec<String> =
                paragraphs.iter().map(|p| p.to_string()).collect();
            sections.resize_with(5, String::new);
            Some(sections)
        }
        1 => None,
        _ => Some(vec![String::new(); 5]),
    }
}

/// 句子层（3 节）：句子数超过 3 时生效
fn sentence_tier_three(text: &str) -> Option<Vec<String>> {
    let sentences = split_sentences(text);
    (sentences.len() > 3).then(|| join_groups(&sentences, 3, " "))
}

/// 句子层（5 节）：句子数不少于 5 时生效
fn sentence_tier_five(text: &str) -> Option<Vec<String>> {
    let sentences = split_sentences(text);
    (sentences.len() >= 5).then(|| join_groups(&sentences, 5, " "))
}

/// 字符层兜底：前 count-1 片各取 len/count 个字符，末片吸收剩余
///
/// 长度按字符数（Unicode 标量）计，切片后逐片去除首尾空白
fn character_tier(text: &str, count: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let size = chars.len() / count;

    (0..count)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == count { chars.len() } else { start + size };
            let slice: String = chars[start..end].iter().collect();
            slice.trim().to_string()
        })
        .collect()
}

/// 按段落分隔符切分，逐段去空白并丢弃空段
fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// 按句子切分：`.` `!` `?` 后紧跟空白处断句
///
/// 标点保留在前句末尾，整段空白作为分隔符丢弃；
/// 缩写、小数点后的空白同样断句（维持简单启发式）
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminator = false;
    let mut iter = text.char_indices().peekable();

    while let Some((idx, ch)) = iter.next() {
        if ch.is_whitespace() && after_terminator {
            sentences.push(&text[start..idx]);

            // 吞掉整段连续空白
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next_ch)) = iter.peek() {
                if !next_ch.is_whitespace() {
                    break;
                }
                end = next_idx + next_ch.len_utf8();
                iter.next();
            }

            start = end;
            after_terminator = false;
        } else {
            after_terminator = matches!(ch, '.' | '!' | '?');
        }
    }

    sentences.push(&text[start..]);
    sentences
}

/// 把 total 个条目分成 groups 组时每组的条目数，余数优先补给靠前的组
fn group_sizes(total: usize, groups: usize) -> Vec<usize> {
    let base = total / groups;
    let remainder = total % groups;

    (0..groups).map(|i| base + usize::from(i < remainder)).collect()
}

/// 按 group_sizes 的分组把条目连接成节
fn join_groups(items: &[&str], groups: usize, separator: &str) -> Vec<String> {
    let mut sections = Vec::with_capacity(groups);
    let mut start = 0;

    for size in group_sizes(items.len(), groups) {
        let end = start + size;
        sections.push(items[start..end].join(separator));
        start = end;
    }

    sections
}

/// 固定节数：不足补空节，超出截断
fn into_sections<const N: usize>(sections: Vec<String>) -> [String; N] {
    let mut iter = sections.into_iter();
    std::array::from_fn(|_| iter.next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_sections() {
        assert_eq!(split_three(""), ["", "", ""]);
        assert_eq!(split_five(""), ["", "", "", "", ""]);
        // 纯空白等价于空文本
        assert_eq!(split_three("   \n\n  "), ["", "", ""]);
        assert_eq!(split_five("   \n\n  "), ["", "", "", "", ""]);
    }

    #[test]
    fn test_three_paragraphs_map_one_per_section() {
        assert_eq!(split_three("A\n\nB\n\nC"), ["A", "B", "C"]);
    }

    #[test]
    fn test_two_paragraphs_padded_with_empty_section() {
        assert_eq!(split_three("A\n\nB"), ["A", "B", ""]);
    }

    #[test]
    fn test_seven_paragraphs_grouped_remainder_first() {
        let text = "P0\n\nP1\n\nP2\n\nP3\n\nP4\n\nP5\n\nP6";
        let sections = split_three(text);

        // 7 段分 3 组：基数 2，余 1 补给第一组 → [3, 2, 2]
        assert_eq!(sections[0], "P0\n\nP1\n\nP2");
        assert_eq!(sections[1], "P3\n\nP4");
        assert_eq!(sections[2], "P5\n\nP6");
    }

    #[test]
    fn test_surrounding_whitespace_never_reaches_sections() {
        assert_eq!(split_three("  A\n\nB  \n"), ["A", "B", ""]);
    }

    #[test]
    fn test_single_paragraph_four_sentences_grouped() {
        let sections = split_three("One. Two. Three. Four.");

        // 4 句分 3 组 → [2, 1, 1]，组内空格连接
        assert_eq!(sections[0], "One. Two.");
        assert_eq!(sections[1], "Three.");
        assert_eq!(sections[2], "Four.");
    }

    #[test]
    fn test_single_paragraph_nine_sentences_grouped_evenly() {
        let text = "S1. S2. S3. S4. S5. S6. S7. S8. S9.";
        let sections = split_three(text);

        assert_eq!(sections[0], "S1. S2. S3.");
        assert_eq!(sections[1], "S4. S5. S6.");
        assert_eq!(sections[2], "S7. S8. S9.");
    }

    #[test]
    fn test_character_fallback_slices_and_trims() {
        // 无句末标点，7 个字符 → 每片 2 字符，末片吸收剩余
        let sections = split_three("ab cdef");

        assert_eq!(sections, ["ab", "c", "def"]);
    }

    #[test]
    fn test_character_fallback_counts_chars_not_bytes() {
        // 多字节字符按字符数均分，不会切进码点中间
        let sections = split_three("ééé");

        assert_eq!(sections, ["é", "é", "é"]);
    }

    #[test]
    fn test_five_exact_paragraph_boundary() {
        let text = "P0\n\nP1\n\nP2\n\nP3\n\nP4";
        assert_eq!(split_five(text), ["P0", "P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_five_aggregates_trailing_paragraphs() {
        let text = "P0\n\nP1\n\nP2\n\nP3\n\nP4\n\nP5";
        let sections = split_five(text);

        assert_eq!(sections[3], "P3");
        assert_eq!(sections[4], "P4\n\nP5");
    }

    #[test]
    fn test_five_with_four_paragraphs_skips_fourth_slot() {
        let text = "P0\n\nP1\n\nP2\n\nP3";
        assert_eq!(split_five(text), ["P0", "P1", "P2", "", "P3"]);
    }

    #[test]
    fn test_five_with_three_paragraphs_pads_tail() {
        assert_eq!(split_five("A\n\nB\n\nC"), ["A", "B", "C", "", ""]);
        assert_eq!(split_five("A\n\nB"), ["A", "B", "", "", ""]);
    }

    #[test]
    fn test_five_single_paragraph_six_sentences() {
        let sections = split_five("A. B. C. D. E. F.");

        // 6 句分 5 组 → [2, 1, 1, 1, 1]
        assert_eq!(sections[0], "A. B.");
        assert_eq!(sections[1], "C.");
        assert_eq!(sections[4], "F.");
    }

    #[test]
    fn test_five_single_paragraph_few_sentences_falls_to_chars() {
        // 3 句不足 5，退到字符层：10 个字符 → 每片 2 字符，逐片去空白
        let sections = split_five("ab. cd. ef");

        assert_eq!(sections, ["ab", ".", "cd", ".", "ef"]);
    }

    #[test]
    fn test_sentence_split_keeps_terminator() {
        let sentences = split_sentences("First. Second! Third?");
        assert_eq!(sentences, ["First.", "Second!", "Third?"]);
    }

    #[test]
    fn test_sentence_split_consumes_whitespace_run() {
        let sentences = split_sentences("A.   \n B");
        assert_eq!(sentences, ["A.", "B"]);
    }

    #[test]
    fn test_sentence_split_breaks_after_any_terminator() {
        // 简单启发式：缩写后的空白同样断句
        let sentences = split_sentences("Dr. Silva chegou. Fim");
        assert_eq!(sentences, ["Dr.", "Silva chegou.", "Fim"]);
    }

    #[test]
    fn test_group_sizes_distributes_remainder_to_front() {
        assert_eq!(group_sizes(7, 3), vec![3, 2, 2]);
        assert_eq!(group_sizes(9, 3), vec![3, 3, 3]);
        assert_eq!(group_sizes(6, 5), vec![2, 1, 1, 1, 1]);
    }
}
