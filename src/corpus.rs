use std::fs;
use std::path::Path;

/// Built-in evaluation sentences: raw speech-to-text output covering filler
/// words, homophone mistakes, 的/地/得 confusion, and mixed Chinese/English
/// technical vocabulary. Indexed 1..N in the report.
pub const BUILTIN_CASES: [&str; 11] = [
    "那个嗯我昨天去超市买东西啊结果发现额就是那个牛奶涨价了嗯涨了好多",
    "这个问题我在想想你先别急我以经有思路了等我在确认一下",
    "我觉得这是一个很好的鸡会我们木前的主意力应该放在这个方向上",
    "我最近买了一些鸡精收益还不错大概年化百分之八左右",
    "做汤的时候记得放点鸡精味道会好很多",
    "她认真的完成了作业然后开心的跑去找同学玩结果摔的很惨",
    "我们用typescript写的然后部署在docker里面用了kubernetes做编排还有就是用了redis做缓存",
    "额我跟你说啊就是那个嗯我们公司最近在做一个新项目就是要做一个智能客服系统然后呢我们选了一个开源的框架但是发现他的文当写的特别差很多接口都没有说明我们的开发人员花了很多时间去阅读原马才搞明白怎么用",
    "这个服务器的配制是三十二核六十四G内存硬盘是两个T的固太硬盘",
    "嗯那个我们的api嗯就是restful的那种然后用了jwt做认证嗯对然后cors也配了就是有时候会报四零三的错误",
    "你知道吗就是那个嗯我发现一个问题就是我们的数据库查询太慢了我看了一下发现是因为没有加索引然后我就给那几个常用的字断加了索引速度一下子就上来了快了大概有十倍左右",
];

pub fn builtin_cases() -> Vec<String> {
    BUILTIN_CASES.iter().map(|s| s.to_string()).collect()
}

/// Load a corpus from a JSON file holding an array of input strings, so the
/// harness can run against sentences other than the built-in set.
pub fn load_cases(path: &Path) -> Result<Vec<String>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read corpus file {}: {}", path.display(), e))?;

    serde_json::from_str(&contents)
        .map_err(|e| format!("Corpus file {} is not a JSON array of strings: {}", path.display(), e))
}
